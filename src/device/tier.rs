// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Performance tier classification
//!
//! A weighted point system over RAM, core count, GPU descriptor and the
//! overall benchmark score, with an optional boost from the known-device
//! catalog.

use serde::{Deserialize, Serialize};

use super::catalog::KnownDeviceCatalog;
use super::snapshot::{screen_diagonal, DeviceSnapshot, DeviceType};

/// Score at or above which a device is high tier
pub const HIGH_TIER_THRESHOLD: u32 = 90;
/// Score at or above which a device is medium tier
pub const MEDIUM_TIER_THRESHOLD: u32 = 65;

/// Coarse performance classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    #[serde(alias = "low_performance")]
    Low,
    #[serde(alias = "medium_performance")]
    Medium,
    #[serde(alias = "high_performance")]
    High,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 3] = [
        PerformanceTier::Low,
        PerformanceTier::Medium,
        PerformanceTier::High,
    ];

    /// Tier for a total classifier score
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= HIGH_TIER_THRESHOLD => PerformanceTier::High,
            s if s >= MEDIUM_TIER_THRESHOLD => PerformanceTier::Medium,
            _ => PerformanceTier::Low,
        }
    }

    /// Translation key for the tier label
    pub fn key(&self) -> &'static str {
        match self {
            PerformanceTier::Low => "low_performance",
            PerformanceTier::Medium => "medium_performance",
            PerformanceTier::High => "high_performance",
        }
    }

    /// Points added when the catalog lists the device at this tier
    pub fn catalog_bonus(&self) -> u32 {
        match self {
            PerformanceTier::High => 10,
            PerformanceTier::Medium => 5,
            PerformanceTier::Low => 0,
        }
    }

    /// Expected game compatibility for devices of this tier
    pub fn compatibility(&self) -> CompatibilityInfo {
        match self {
            PerformanceTier::Low => CompatibilityInfo {
                support: "supported_status",
                recommended_graphics: "low_status",
                fps_min: 20,
                fps_max: 30,
                battery_life: "limited_status",
                heating: "may_heat_status",
            },
            PerformanceTier::Medium => CompatibilityInfo {
                support: "supported_status",
                recommended_graphics: "medium_status",
                fps_min: 30,
                fps_max: 60,
                battery_life: "medium_status",
                heating: "normal_status",
            },
            PerformanceTier::High => CompatibilityInfo {
                support: "supported_status",
                recommended_graphics: "high_status",
                fps_min: 60,
                fps_max: 90,
                battery_life: "good_status",
                heating: "normal_status",
            },
        }
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceTier::Low => write!(f, "low"),
            PerformanceTier::Medium => write!(f, "medium"),
            PerformanceTier::High => write!(f, "high"),
        }
    }
}

/// Compatibility expectations, as translation keys plus an FPS range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityInfo {
    pub support: &'static str,
    pub recommended_graphics: &'static str,
    pub fps_min: u32,
    pub fps_max: u32,
    pub battery_life: &'static str,
    pub heating: &'static str,
}

impl CompatibilityInfo {
    /// e.g. "30-60"
    pub fn fps_range(&self) -> String {
        format!("{}-{}", self.fps_min, self.fps_max)
    }
}

/// GPU tier used by the adjustment engine and the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuTier {
    Low,
    Medium,
    High,
    Flagship,
}

impl std::fmt::Display for GpuTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuTier::Low => write!(f, "low"),
            GpuTier::Medium => write!(f, "medium"),
            GpuTier::High => write!(f, "high"),
            GpuTier::Flagship => write!(f, "flagship"),
        }
    }
}

const FLAGSHIP_GPUS: &[&str] = &["adreno 750", "apple a17", "apple m", "snapdragon 8 gen 3"];
const HIGH_GPUS: &[&str] = &["adreno 7", "mali-g78", "apple a15", "apple a16", "snapdragon 8"];
const MEDIUM_HIGH_GPUS: &[&str] = &["adreno 6", "mali-g", "apple a14", "snapdragon 7"];
const GPU_VENDORS: &[&str] = &["adreno", "mali", "apple"];

/// Result of matching a GPU descriptor against the known identifier lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuClass {
    Flagship,
    High,
    MediumHigh,
    /// A mobile GPU vendor was recognized but not the model
    Vendor,
    Unknown,
}

impl GpuClass {
    /// Case-insensitive substring match, most specific list first
    pub fn detect(descriptor: &str) -> Self {
        let lower = descriptor.to_lowercase();
        let any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

        if any(FLAGSHIP_GPUS) {
            GpuClass::Flagship
        } else if any(HIGH_GPUS) {
            GpuClass::High
        } else if any(MEDIUM_HIGH_GPUS) {
            GpuClass::MediumHigh
        } else if any(GPU_VENDORS) {
            GpuClass::Vendor
        } else {
            GpuClass::Unknown
        }
    }

    /// Classifier points for this GPU class
    pub fn points(&self) -> u32 {
        match self {
            GpuClass::Flagship => 30,
            GpuClass::High => 25,
            GpuClass::MediumHigh => 20,
            GpuClass::Vendor => 15,
            GpuClass::Unknown => 10,
        }
    }

    pub fn tier(&self) -> GpuTier {
        match self {
            GpuClass::Flagship => GpuTier::Flagship,
            GpuClass::High => GpuTier::High,
            GpuClass::MediumHigh => GpuTier::Medium,
            GpuClass::Vendor | GpuClass::Unknown => GpuTier::Low,
        }
    }
}

/// Estimated physical screen size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSizeClass {
    Small,
    Medium,
    Large,
    XLarge,
}

impl ScreenSizeClass {
    /// Estimate from the pixel diagonal. Tablets use their own thresholds;
    /// every other device type uses the phone thresholds.
    pub fn estimate(device_type: DeviceType, width: u32, height: u32) -> Self {
        let diagonal = screen_diagonal(width, height);

        if device_type == DeviceType::Tablet {
            if diagonal > 2000.0 {
                ScreenSizeClass::XLarge
            } else if diagonal > 1500.0 {
                ScreenSizeClass::Large
            } else {
                ScreenSizeClass::Medium
            }
        } else if diagonal > 2500.0 {
            ScreenSizeClass::Large
        } else if diagonal > 2000.0 {
            ScreenSizeClass::Medium
        } else {
            ScreenSizeClass::Small
        }
    }
}

impl std::fmt::Display for ScreenSizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenSizeClass::Small => write!(f, "small"),
            ScreenSizeClass::Medium => write!(f, "medium"),
            ScreenSizeClass::Large => write!(f, "large"),
            ScreenSizeClass::XLarge => write!(f, "xlarge"),
        }
    }
}

fn ram_points(ram_gb: f64) -> u32 {
    match ram_gb {
        r if r >= 16.0 => 35,
        r if r >= 12.0 => 30,
        r if r >= 8.0 => 25,
        r if r >= 6.0 => 20,
        r if r >= 4.0 => 15,
        _ => 10,
    }
}

fn cpu_points(cores: u32) -> u32 {
    match cores {
        8.. => 25,
        6..=7 => 20,
        4..=5 => 15,
        _ => 10,
    }
}

/// Total classifier score for a snapshot
pub fn score(snapshot: &DeviceSnapshot, catalog: &KnownDeviceCatalog) -> u32 {
    let ram = ram_points(snapshot.ram_gb);
    let cpu = cpu_points(snapshot.cpu_cores);
    let gpu = GpuClass::detect(&snapshot.gpu_descriptor).points();
    // round(score * 0.15) in integer arithmetic
    let performance = (snapshot.overall_performance_score as u32 * 15 + 50) / 100;
    let catalog_bonus = catalog
        .lookup(snapshot.device_type, &snapshot.device_name)
        .map(|device| device.tier.catalog_bonus())
        .unwrap_or(0);

    let total = ram + cpu + gpu + performance + catalog_bonus;
    tracing::debug!(
        ram,
        cpu,
        gpu,
        performance,
        catalog_bonus,
        total,
        "classifier score"
    );
    total
}

/// Classify a snapshot into a performance tier. Deterministic.
pub fn classify(snapshot: &DeviceSnapshot, catalog: &KnownDeviceCatalog) -> PerformanceTier {
    PerformanceTier::from_score(score(snapshot, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ram_gb: f64, cpu_cores: u32, gpu: &str, performance: u8) -> DeviceSnapshot {
        DeviceSnapshot {
            device_type: DeviceType::Mobile,
            ram_gb,
            cpu_cores,
            gpu_descriptor: gpu.to_string(),
            overall_performance_score: performance,
            ..DeviceSnapshot::fallback()
        }
    }

    // ===== classify tests =====

    #[test]
    fn test_flagship_phone_is_high() {
        let catalog = KnownDeviceCatalog::empty();
        let snap = snapshot(8.0, 8, "Adreno 750", 90);
        assert_eq!(score(&snap, &catalog), 94);
        assert_eq!(classify(&snap, &catalog), PerformanceTier::High);
    }

    #[test]
    fn test_defaults_still_classify() {
        let catalog = KnownDeviceCatalog::empty();
        // 15 + 15 + 10 + round(7.5)
        let snap = DeviceSnapshot::fallback();
        assert_eq!(score(&snap, &catalog), 48);
        assert_eq!(classify(&snap, &catalog), PerformanceTier::Low);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let catalog = KnownDeviceCatalog::builtin();
        let snap = snapshot(6.0, 8, "Mali-G78 MP20", 70);
        let first = classify(&snap, &catalog);
        for _ in 0..10 {
            assert_eq!(classify(&snap, &catalog), first);
        }
    }

    #[test]
    fn test_catalog_match_boosts_score() {
        let catalog = KnownDeviceCatalog::builtin();
        let mut snap = snapshot(6.0, 8, "Adreno 740", 60);
        // 20 + 25 + 25 + 9
        assert_eq!(score(&snap, &catalog), 79);

        snap.device_name = "Samsung Galaxy S24".to_string();
        assert_eq!(score(&snap, &catalog), 89);

        snap.device_name = "Samsung Galaxy A54".to_string();
        assert_eq!(score(&snap, &catalog), 84);
    }

    #[test]
    fn test_catalog_match_respects_device_type() {
        let catalog = KnownDeviceCatalog::builtin();
        let mut snap = snapshot(4.0, 4, "", 50);
        snap.device_name = "iPad Air".to_string();
        let base = 15 + 15 + 10 + 8;
        assert_eq!(score(&snap, &catalog), base);

        snap.device_type = DeviceType::Tablet;
        assert_eq!(score(&snap, &catalog), base + 10);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(PerformanceTier::from_score(90), PerformanceTier::High);
        assert_eq!(PerformanceTier::from_score(89), PerformanceTier::Medium);
        assert_eq!(PerformanceTier::from_score(65), PerformanceTier::Medium);
        assert_eq!(PerformanceTier::from_score(64), PerformanceTier::Low);
    }

    #[test]
    fn test_ram_and_cpu_points() {
        assert_eq!(ram_points(16.0), 35);
        assert_eq!(ram_points(12.0), 30);
        assert_eq!(ram_points(7.9), 20);
        assert_eq!(ram_points(3.0), 10);
        assert_eq!(cpu_points(12), 25);
        assert_eq!(cpu_points(6), 20);
        assert_eq!(cpu_points(5), 15);
        assert_eq!(cpu_points(1), 10);
    }

    // ===== GpuClass tests =====

    #[test]
    fn test_gpu_class_detect() {
        assert_eq!(GpuClass::detect("Qualcomm - Adreno (TM) 750"), GpuClass::Vendor);
        assert_eq!(GpuClass::detect("Adreno 750"), GpuClass::Flagship);
        assert_eq!(GpuClass::detect("Apple M2"), GpuClass::Flagship);
        assert_eq!(GpuClass::detect("ARM - Mali-G78 MP14"), GpuClass::High);
        assert_eq!(GpuClass::detect("Mali-G57 MC2"), GpuClass::MediumHigh);
        assert_eq!(GpuClass::detect("Adreno (TM) 618"), GpuClass::Vendor);
        assert_eq!(GpuClass::detect("Adreno 618"), GpuClass::MediumHigh);
        assert_eq!(GpuClass::detect("Mali-T880"), GpuClass::Vendor);
        assert_eq!(GpuClass::detect("NVIDIA GeForce RTX 4090"), GpuClass::Unknown);
        assert_eq!(GpuClass::detect("unknown"), GpuClass::Unknown);
    }

    #[test]
    fn test_gpu_class_tier() {
        assert_eq!(GpuClass::Flagship.tier(), GpuTier::Flagship);
        assert_eq!(GpuClass::MediumHigh.tier(), GpuTier::Medium);
        assert_eq!(GpuClass::Vendor.tier(), GpuTier::Low);
        assert_eq!(GpuClass::Unknown.points(), 10);
    }

    // ===== ScreenSizeClass tests =====

    #[test]
    fn test_screen_size_phone() {
        assert_eq!(
            ScreenSizeClass::estimate(DeviceType::Mobile, 1440, 3120),
            ScreenSizeClass::Large
        );
        assert_eq!(
            ScreenSizeClass::estimate(DeviceType::Mobile, 1080, 1920),
            ScreenSizeClass::Medium
        );
        assert_eq!(
            ScreenSizeClass::estimate(DeviceType::Mobile, 720, 1600),
            ScreenSizeClass::Small
        );
    }

    #[test]
    fn test_screen_size_tablet() {
        assert_eq!(
            ScreenSizeClass::estimate(DeviceType::Tablet, 2048, 2732),
            ScreenSizeClass::XLarge
        );
        assert_eq!(
            ScreenSizeClass::estimate(DeviceType::Tablet, 1200, 1000),
            ScreenSizeClass::Large
        );
        assert_eq!(
            ScreenSizeClass::estimate(DeviceType::Tablet, 768, 1024),
            ScreenSizeClass::Medium
        );
    }

    #[test]
    fn test_screen_size_desktop_uses_phone_thresholds() {
        assert_eq!(
            ScreenSizeClass::estimate(DeviceType::Desktop, 1920, 1080),
            ScreenSizeClass::Medium
        );
    }

    // ===== compatibility tests =====

    #[test]
    fn test_compatibility_per_tier() {
        let low = PerformanceTier::Low.compatibility();
        assert_eq!(low.fps_range(), "20-30");
        assert_eq!(low.heating, "may_heat_status");

        let medium = PerformanceTier::Medium.compatibility();
        assert_eq!(medium.recommended_graphics, "medium_status");
        assert_eq!(medium.fps_range(), "30-60");

        let high = PerformanceTier::High.compatibility();
        assert_eq!(high.battery_life, "good_status");
        assert_eq!(high.fps_range(), "60-90");
    }

    #[test]
    fn test_tier_serde_aliases() {
        let tier: PerformanceTier = serde_json::from_str("\"high_performance\"").unwrap();
        assert_eq!(tier, PerformanceTier::High);
        let tier: PerformanceTier = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(tier, PerformanceTier::Low);
        assert_eq!(serde_json::to_string(&PerformanceTier::Medium).unwrap(), "\"medium\"");
    }
}
