// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Normalized device snapshot
//!
//! A `DeviceSnapshot` is always fully populated. Signals the host did not
//! report are replaced by defaults or estimates; their absence only shows up
//! in `detection_accuracy` and in the downstream confidence score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::signals::RawSignals;
use super::user_agent::{self, OsInfo, UNKNOWN_DEVICE};

/// Descriptor used when no GPU information is available
pub const GPU_UNKNOWN: &str = "unknown";
/// Descriptor used when WebGL works but the renderer is masked
pub const GPU_WEBGL_ONLY: &str = "WebGL supported";
/// Descriptor used when WebGL is unavailable
pub const GPU_NO_WEBGL: &str = "WebGL unsupported";

const DEFAULT_CPU_CORES: u32 = 2;
const DEFAULT_COLOR_DEPTH: u32 = 24;
const DEFAULT_PERFORMANCE_SCORE: u8 = 50;
const FALLBACK_ACCURACY: u8 = 20;

/// Device form factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
    Unknown,
}

impl DeviceType {
    /// Assumed physical diagonal in inches, used for pixel density
    pub fn assumed_diagonal_inches(&self) -> f64 {
        match self {
            DeviceType::Tablet => 10.0,
            DeviceType::Desktop => 24.0,
            DeviceType::Mobile | DeviceType::Unknown => 5.0,
        }
    }

    /// Translation key for the form factor label
    pub fn label_key(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile_btn",
            DeviceType::Tablet => "tablet_btn",
            DeviceType::Desktop => "pc_btn",
            DeviceType::Unknown => "unknown_device",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceType::Mobile => write!(f, "mobile"),
            DeviceType::Tablet => write!(f, "tablet"),
            DeviceType::Desktop => write!(f, "desktop"),
            DeviceType::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" | "phone" => Ok(DeviceType::Mobile),
            "tablet" => Ok(DeviceType::Tablet),
            "desktop" | "pc" => Ok(DeviceType::Desktop),
            "unknown" => Ok(DeviceType::Unknown),
            other => Err(format!("unknown device type: {}", other)),
        }
    }
}

/// Screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Resolve from an orientation type string, else from the dimensions
    fn resolve(orientation_type: Option<&str>, width: u32, height: u32) -> Self {
        match orientation_type {
            Some(kind) if kind.to_lowercase().contains("landscape") => Orientation::Landscape,
            Some(kind) if kind.to_lowercase().contains("portrait") => Orientation::Portrait,
            _ if width > height => Orientation::Landscape,
            _ => Orientation::Portrait,
        }
    }
}

/// Network characteristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub effective_type: String,
    pub downlink_mbps: f64,
    pub rtt_ms: u32,
    pub save_data: bool,
}

impl Default for NetworkInfo {
    fn default() -> Self {
        Self {
            effective_type: "unknown".to_string(),
            downlink_mbps: 0.0,
            rtt_ms: 0,
            save_data: false,
        }
    }
}

/// Touch capabilities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchInfo {
    pub touch_supported: bool,
    pub max_touch_points: u32,
    pub pointer_events_supported: bool,
    pub force_touch_supported: bool,
}

/// Which optional host APIs actually answered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalAvailability {
    pub device_memory: bool,
    pub hardware_concurrency: bool,
    pub connection: bool,
    pub battery: bool,
}

/// Normalized, fully populated description of the client device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    // Identity
    pub os: OsInfo,
    pub browser: String,
    pub device_name: String,
    pub device_type: DeviceType,
    pub platform: String,

    // Hardware
    pub ram_gb: f64,
    pub cpu_cores: u32,
    pub gpu_descriptor: String,

    // Display
    pub screen_width_px: u32,
    pub screen_height_px: u32,
    pub viewport_width_px: u32,
    pub viewport_height_px: u32,
    pub pixel_ratio: f64,
    pub pixel_density: u32,
    pub color_depth: u32,
    pub orientation: Orientation,

    pub network: NetworkInfo,
    pub touch: TouchInfo,

    // Benchmarks, 0-100 (higher is faster)
    pub js_benchmark_score: Option<u8>,
    pub webgl_benchmark_score: Option<u8>,

    // Derived
    pub overall_performance_score: u8,
    pub detection_accuracy: u8,

    pub availability: SignalAvailability,
    pub detected_at: DateTime<Utc>,
}

impl DeviceSnapshot {
    /// Normalize raw host signals into a snapshot
    pub fn from_signals(raw: &RawSignals) -> Self {
        let ua = raw.user_agent.as_deref().unwrap_or("");

        let max_touch_points = raw.max_touch_points.unwrap_or(0);
        let touch = TouchInfo {
            touch_supported: raw.touch_events.unwrap_or(false) || max_touch_points > 0,
            max_touch_points,
            pointer_events_supported: raw.pointer_events.unwrap_or(false),
            force_touch_supported: raw.force_touch.unwrap_or(false),
        };

        let screen_width_px = raw.screen_width.unwrap_or(0);
        let screen_height_px = raw.screen_height.unwrap_or(0);
        let device_type = user_agent::detect_device_type(
            ua,
            touch.touch_supported,
            screen_width_px,
            screen_height_px,
        );

        let os = match raw.os_name.as_deref() {
            Some(name) if !name.trim().is_empty() => OsInfo {
                name: name.to_string(),
                version: raw
                    .os_version
                    .clone()
                    .unwrap_or_else(|| user_agent::UNKNOWN_OS.to_string()),
                mobile: matches!(name, "Android" | "iOS"),
            },
            _ => user_agent::detect_os(ua),
        };

        let reported_cores = raw.hardware_concurrency.filter(|&c| c >= 1);
        let cpu_cores = reported_cores.unwrap_or(DEFAULT_CPU_CORES);

        let reported_ram = raw.device_memory.filter(|&gb| gb > 0.0);
        let screen_pixels = screen_width_px as u64 * screen_height_px as u64;
        let ram_gb = reported_ram
            .unwrap_or_else(|| user_agent::estimate_ram(ua, cpu_cores, screen_pixels));

        let gpu_descriptor = match (raw.gpu_vendor.as_deref(), raw.gpu_renderer.as_deref()) {
            (Some(vendor), Some(renderer)) => format!("{} - {}", vendor, renderer),
            (None, Some(renderer)) => renderer.to_string(),
            (Some(vendor), None) => vendor.to_string(),
            (None, None) => match raw.webgl_supported {
                Some(true) => GPU_WEBGL_ONLY.to_string(),
                Some(false) => GPU_NO_WEBGL.to_string(),
                None => GPU_UNKNOWN.to_string(),
            },
        };

        let pixel_ratio = raw.device_pixel_ratio.filter(|&r| r > 0.0).unwrap_or(1.0);
        let pixel_density =
            estimate_pixel_density(device_type, screen_width_px, screen_height_px, pixel_ratio);

        let network = raw
            .connection
            .as_ref()
            .map(|conn| NetworkInfo {
                effective_type: conn
                    .effective_type
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
                downlink_mbps: conn.downlink.unwrap_or(0.0),
                rtt_ms: conn.rtt.unwrap_or(0),
                save_data: conn.save_data.unwrap_or(false),
            })
            .unwrap_or_default();

        let js_benchmark_score = raw.js_benchmark_ms.map(|ms| benchmark_score(ms, 10.0));
        let webgl_benchmark_score = match raw.webgl_supported {
            Some(false) => None,
            _ => raw.webgl_benchmark_ms.map(|ms| benchmark_score(ms, 5.0)),
        };

        let availability = SignalAvailability {
            device_memory: reported_ram.is_some(),
            hardware_concurrency: reported_cores.is_some(),
            connection: raw.connection.is_some(),
            battery: raw.battery_available.unwrap_or(false),
        };

        let mut snapshot = Self {
            os,
            browser: user_agent::detect_browser(ua).to_string(),
            device_name: user_agent::extract_device_name(ua),
            device_type,
            platform: raw.platform.clone().unwrap_or_default(),
            ram_gb,
            cpu_cores,
            gpu_descriptor,
            screen_width_px,
            screen_height_px,
            viewport_width_px: raw.viewport_width.unwrap_or(screen_width_px),
            viewport_height_px: raw.viewport_height.unwrap_or(screen_height_px),
            pixel_ratio,
            pixel_density,
            color_depth: raw.color_depth.unwrap_or(DEFAULT_COLOR_DEPTH),
            orientation: Orientation::resolve(
                raw.orientation_type.as_deref(),
                screen_width_px,
                screen_height_px,
            ),
            network,
            touch,
            js_benchmark_score,
            webgl_benchmark_score,
            overall_performance_score: DEFAULT_PERFORMANCE_SCORE,
            detection_accuracy: 0,
            availability,
            detected_at: Utc::now(),
        };

        snapshot.overall_performance_score = snapshot.compute_performance_score();
        snapshot.detection_accuracy = snapshot.compute_detection_accuracy();

        tracing::debug!(
            device_type = %snapshot.device_type,
            ram_gb = snapshot.ram_gb,
            cpu_cores = snapshot.cpu_cores,
            performance = snapshot.overall_performance_score,
            accuracy = snapshot.detection_accuracy,
            "normalized device signals"
        );

        snapshot
    }

    /// Snapshot used when detection cannot run at all
    pub fn fallback() -> Self {
        Self {
            os: OsInfo::unknown(),
            browser: "Unknown".to_string(),
            device_name: UNKNOWN_DEVICE.to_string(),
            device_type: DeviceType::Unknown,
            platform: String::new(),
            ram_gb: 4.0,
            cpu_cores: 4,
            gpu_descriptor: GPU_UNKNOWN.to_string(),
            screen_width_px: 0,
            screen_height_px: 0,
            viewport_width_px: 0,
            viewport_height_px: 0,
            pixel_ratio: 1.0,
            pixel_density: 0,
            color_depth: DEFAULT_COLOR_DEPTH,
            orientation: Orientation::Portrait,
            network: NetworkInfo::default(),
            touch: TouchInfo::default(),
            js_benchmark_score: None,
            webgl_benchmark_score: None,
            overall_performance_score: DEFAULT_PERFORMANCE_SCORE,
            detection_accuracy: FALLBACK_ACCURACY,
            availability: SignalAvailability::default(),
            detected_at: Utc::now(),
        }
    }

    /// Replace the detected form factor with a user choice
    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self.pixel_density = estimate_pixel_density(
            device_type,
            self.screen_width_px,
            self.screen_height_px,
            self.pixel_ratio,
        );
        self
    }

    /// Whether the model name was identified
    pub fn device_name_known(&self) -> bool {
        !self.device_name.trim().is_empty() && !self.device_name.to_lowercase().contains("unknown")
    }

    /// Whether an actual GPU vendor/renderer was reported
    pub fn gpu_resolved(&self) -> bool {
        let descriptor = self.gpu_descriptor.trim();
        !descriptor.is_empty()
            && !descriptor.eq_ignore_ascii_case(GPU_UNKNOWN)
            && descriptor != GPU_WEBGL_ONLY
            && descriptor != GPU_NO_WEBGL
    }

    /// Mean of the available benchmark and hardware factor scores
    fn compute_performance_score(&self) -> u8 {
        let mut factors: Vec<f64> = Vec::with_capacity(4);

        if let Some(js) = self.js_benchmark_score {
            factors.push(js as f64);
        }
        if let Some(webgl) = self.webgl_benchmark_score {
            factors.push(webgl as f64);
        }
        if self.ram_gb > 0.0 {
            factors.push((self.ram_gb / 8.0 * 100.0).min(100.0));
        }
        if self.cpu_cores > 0 {
            factors.push((self.cpu_cores as f64 / 8.0 * 100.0).min(100.0));
        }

        if factors.is_empty() {
            return DEFAULT_PERFORMANCE_SCORE;
        }
        let mean = factors.iter().sum::<f64>() / factors.len() as f64;
        mean.round().clamp(0.0, 100.0) as u8
    }

    /// How much of the snapshot comes from real signals rather than defaults
    fn compute_detection_accuracy(&self) -> u8 {
        let mut accuracy: u32 = 0;

        if self.availability.device_memory {
            accuracy += 20;
        }
        if self.availability.hardware_concurrency {
            accuracy += 15;
        }
        if self.availability.connection {
            accuracy += 10;
        }
        if self.availability.battery {
            accuracy += 10;
        }
        if self.gpu_resolved() {
            accuracy += 20;
        }
        if self.device_name_known() {
            accuracy += 15;
        }
        if self.os.is_known() {
            accuracy += 10;
        }

        accuracy.min(100) as u8
    }

    /// Human-readable summary for presentation layers
    pub fn display_summary(&self) -> DisplaySummary {
        DisplaySummary {
            device_name: self.device_name.clone(),
            os: self.os.to_string(),
            ram: if self.availability.device_memory {
                format!("{} GB", self.ram_gb)
            } else {
                format!("~{} GB (estimated)", self.ram_gb)
            },
            cpu: if self.availability.hardware_concurrency {
                format!("{} cores", self.cpu_cores)
            } else {
                "unknown".to_string()
            },
            gpu: self.gpu_descriptor.clone(),
            resolution: format!("{}×{}", self.screen_width_px, self.screen_height_px),
            touch_points: self.touch.max_touch_points,
            device_type: self.device_type,
            performance_score: self.overall_performance_score,
            accuracy: self.detection_accuracy,
        }
    }
}

/// Display-ready strings derived from a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySummary {
    pub device_name: String,
    pub os: String,
    pub ram: String,
    pub cpu: String,
    pub gpu: String,
    pub resolution: String,
    pub touch_points: u32,
    pub device_type: DeviceType,
    pub performance_score: u8,
    pub accuracy: u8,
}

/// Convert a benchmark duration into a 0-100 score, `divisor` ms per point
pub fn benchmark_score(duration_ms: f64, divisor: f64) -> u8 {
    (100.0 - duration_ms / divisor).clamp(0.0, 100.0).round() as u8
}

/// Screen diagonal in pixels
pub fn screen_diagonal(width: u32, height: u32) -> f64 {
    let w = width as f64;
    let h = height as f64;
    (w * w + h * h).sqrt()
}

/// Rough DPI estimate from the pixel diagonal and an assumed physical size
pub fn estimate_pixel_density(device_type: DeviceType, width: u32, height: u32, ratio: f64) -> u32 {
    (screen_diagonal(width, height) / device_type.assumed_diagonal_inches() * ratio).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::signals::ConnectionSignals;

    const GALAXY_UA: &str = "Mozilla/5.0 (Linux; Android 14; SM-S928B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Mobile Safari/537.36";

    fn full_signals() -> RawSignals {
        RawSignals {
            user_agent: Some(GALAXY_UA.to_string()),
            platform: Some("Linux armv8l".to_string()),
            device_memory: Some(8.0),
            hardware_concurrency: Some(8),
            gpu_vendor: Some("Qualcomm".to_string()),
            gpu_renderer: Some("Adreno (TM) 750".to_string()),
            webgl_supported: Some(true),
            battery_available: Some(true),
            screen_width: Some(1440),
            screen_height: Some(3120),
            device_pixel_ratio: Some(3.0),
            orientation_type: Some("portrait-primary".to_string()),
            connection: Some(ConnectionSignals {
                effective_type: Some("4g".to_string()),
                downlink: Some(10.0),
                rtt: Some(50),
                save_data: Some(false),
            }),
            max_touch_points: Some(10),
            touch_events: Some(true),
            js_benchmark_ms: Some(100.0),
            webgl_benchmark_ms: Some(50.0),
            ..Default::default()
        }
    }

    // ===== from_signals tests =====

    #[test]
    fn test_from_signals_full() {
        let snapshot = DeviceSnapshot::from_signals(&full_signals());

        assert_eq!(snapshot.device_type, DeviceType::Mobile);
        assert_eq!(snapshot.os.name, "Android");
        assert_eq!(snapshot.device_name, "SM-S928B");
        assert_eq!(snapshot.browser, "Chrome");
        assert_eq!(snapshot.ram_gb, 8.0);
        assert_eq!(snapshot.cpu_cores, 8);
        assert_eq!(snapshot.gpu_descriptor, "Qualcomm - Adreno (TM) 750");
        assert_eq!(snapshot.orientation, Orientation::Portrait);
        assert_eq!(snapshot.network.effective_type, "4g");
        assert!(snapshot.touch.touch_supported);
        assert_eq!(snapshot.js_benchmark_score, Some(90));
        assert_eq!(snapshot.webgl_benchmark_score, Some(90));
        // (90 + 90 + 100 + 100) / 4
        assert_eq!(snapshot.overall_performance_score, 95);
        assert_eq!(snapshot.detection_accuracy, 100);
    }

    #[test]
    fn test_from_signals_empty_is_fully_populated() {
        let snapshot = DeviceSnapshot::from_signals(&RawSignals::default());

        assert_eq!(snapshot.device_type, DeviceType::Desktop);
        assert_eq!(snapshot.cpu_cores, 2);
        assert_eq!(snapshot.ram_gb, 4.0);
        assert_eq!(snapshot.gpu_descriptor, GPU_UNKNOWN);
        assert_eq!(snapshot.pixel_ratio, 1.0);
        assert_eq!(snapshot.color_depth, 24);
        assert_eq!(snapshot.network, NetworkInfo::default());
        assert_eq!(snapshot.detection_accuracy, 0);
        // RAM 4/8 -> 50, cores 2/8 -> 25
        assert_eq!(snapshot.overall_performance_score, 38);
    }

    #[test]
    fn test_from_signals_estimates_missing_ram() {
        let signals = RawSignals {
            device_memory: None,
            ..full_signals()
        };
        let snapshot = DeviceSnapshot::from_signals(&signals);
        assert_eq!(snapshot.ram_gb, 8.0);
        assert!(!snapshot.availability.device_memory);
        assert_eq!(snapshot.detection_accuracy, 80);
    }

    #[test]
    fn test_from_signals_os_override() {
        let signals = RawSignals {
            os_name: Some("Ubuntu".to_string()),
            os_version: Some("24.04".to_string()),
            ..Default::default()
        };
        let snapshot = DeviceSnapshot::from_signals(&signals);
        assert_eq!(snapshot.os.name, "Ubuntu");
        assert_eq!(snapshot.os.version, "24.04");
        assert!(!snapshot.os.mobile);
    }

    #[test]
    fn test_gpu_descriptor_without_renderer() {
        let signals = RawSignals {
            webgl_supported: Some(true),
            ..Default::default()
        };
        let snapshot = DeviceSnapshot::from_signals(&signals);
        assert_eq!(snapshot.gpu_descriptor, GPU_WEBGL_ONLY);
        assert!(!snapshot.gpu_resolved());

        let signals = RawSignals {
            webgl_supported: Some(false),
            webgl_benchmark_ms: Some(10.0),
            ..Default::default()
        };
        let snapshot = DeviceSnapshot::from_signals(&signals);
        assert_eq!(snapshot.gpu_descriptor, GPU_NO_WEBGL);
        assert_eq!(snapshot.webgl_benchmark_score, None);
    }

    #[test]
    fn test_orientation_from_dimensions() {
        let signals = RawSignals {
            screen_width: Some(1920),
            screen_height: Some(1080),
            ..Default::default()
        };
        let snapshot = DeviceSnapshot::from_signals(&signals);
        assert_eq!(snapshot.orientation, Orientation::Landscape);
    }

    // ===== fallback tests =====

    #[test]
    fn test_fallback_snapshot() {
        let snapshot = DeviceSnapshot::fallback();
        assert_eq!(snapshot.device_type, DeviceType::Unknown);
        assert_eq!(snapshot.ram_gb, 4.0);
        assert_eq!(snapshot.cpu_cores, 4);
        assert_eq!(snapshot.detection_accuracy, 20);
        assert_eq!(snapshot.overall_performance_score, 50);
        assert!(!snapshot.device_name_known());
        assert!(!snapshot.gpu_resolved());
    }

    #[test]
    fn test_with_device_type_recomputes_density() {
        let snapshot = DeviceSnapshot {
            screen_width_px: 3000,
            screen_height_px: 4000,
            ..DeviceSnapshot::fallback()
        };
        let tablet = snapshot.with_device_type(DeviceType::Tablet);
        assert_eq!(tablet.device_type, DeviceType::Tablet);
        assert_eq!(tablet.pixel_density, 500);
    }

    // ===== helpers =====

    #[test]
    fn test_benchmark_score_clamps() {
        assert_eq!(benchmark_score(0.0, 10.0), 100);
        assert_eq!(benchmark_score(250.0, 10.0), 75);
        assert_eq!(benchmark_score(5000.0, 10.0), 0);
    }

    #[test]
    fn test_screen_diagonal() {
        assert_eq!(screen_diagonal(300, 400), 500.0);
        assert_eq!(screen_diagonal(0, 0), 0.0);
    }

    #[test]
    fn test_estimate_pixel_density() {
        assert_eq!(estimate_pixel_density(DeviceType::Mobile, 300, 400, 1.0), 100);
        assert_eq!(estimate_pixel_density(DeviceType::Desktop, 0, 0, 2.0), 0);
    }

    #[test]
    fn test_device_type_from_str() {
        assert_eq!("Mobile".parse::<DeviceType>(), Ok(DeviceType::Mobile));
        assert_eq!("pc".parse::<DeviceType>(), Ok(DeviceType::Desktop));
        assert!("toaster".parse::<DeviceType>().is_err());
    }

    #[test]
    fn test_display_summary() {
        let snapshot = DeviceSnapshot::from_signals(&full_signals());
        let summary = snapshot.display_summary();
        assert_eq!(summary.ram, "8 GB");
        assert_eq!(summary.cpu, "8 cores");
        assert_eq!(summary.resolution, "1440×3120");
        assert_eq!(summary.touch_points, 10);

        let summary = DeviceSnapshot::fallback().display_summary();
        assert_eq!(summary.ram, "~4 GB (estimated)");
        assert_eq!(summary.cpu, "unknown");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let snapshot = DeviceSnapshot::from_signals(&full_signals());
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"deviceType\":\"mobile\""));
        let parsed: DeviceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, parsed);
    }
}
