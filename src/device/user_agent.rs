// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! User-agent heuristics
//!
//! Everything here works on spoofable browser hints. Results are best-effort
//! and always produce a value; nothing in this module fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::snapshot::DeviceType;

static ANDROID_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Android\s([0-9.]+)").expect("valid android regex"));
static IOS_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"OS\s([0-9_]+)").expect("valid ios regex"));
static WINDOWS_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Windows NT\s([0-9.]+)").expect("valid windows regex"));
static MACOS_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Mac OS X\s([0-9_]+)").expect("valid macos regex"));
static UA_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid parenthetical regex"));
static ANDROID_BUILD_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*Build/.*$").expect("valid build regex"));

/// Name used when the operating system cannot be identified
pub const UNKNOWN_OS: &str = "Unknown";

/// Name used when the device model cannot be identified
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Operating system identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: String,
    pub version: String,
    /// Android or iOS
    pub mobile: bool,
}

impl OsInfo {
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_OS.to_string(),
            version: UNKNOWN_OS.to_string(),
            mobile: false,
        }
    }

    /// Whether the OS was identified
    pub fn is_known(&self) -> bool {
        self.name != UNKNOWN_OS && !self.name.is_empty()
    }
}

impl std::fmt::Display for OsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn is_ios(ua: &str) -> bool {
    ua.contains("iPad") || ua.contains("iPhone") || ua.contains("iPod")
}

/// Detect the operating system from a user-agent string
pub fn detect_os(ua: &str) -> OsInfo {
    let mut os = OsInfo::unknown();

    if contains_ci(ua, "android") {
        os.name = "Android".to_string();
        os.mobile = true;
        if let Some(caps) = ANDROID_VERSION.captures(ua) {
            os.version = caps[1].to_string();
        }
    } else if is_ios(ua) {
        os.name = "iOS".to_string();
        os.mobile = true;
        if let Some(caps) = IOS_VERSION.captures(ua) {
            os.version = caps[1].replace('_', ".");
        }
    } else if contains_ci(ua, "windows nt") {
        os.name = "Windows".to_string();
        if let Some(caps) = WINDOWS_VERSION.captures(ua) {
            os.version = match &caps[1] {
                "10.0" => "10/11".to_string(),
                "6.3" => "8.1".to_string(),
                "6.2" => "8".to_string(),
                "6.1" => "7".to_string(),
                other => other.to_string(),
            };
        }
    } else if contains_ci(ua, "mac os x") {
        os.name = "macOS".to_string();
        if let Some(caps) = MACOS_VERSION.captures(ua) {
            os.version = caps[1].replace('_', ".");
        }
    } else if contains_ci(ua, "linux") {
        os.name = "Linux".to_string();
    }

    os
}

/// Detect the browser family from a user-agent string
pub fn detect_browser(ua: &str) -> &'static str {
    let chrome = contains_ci(ua, "chrome");
    let edge = contains_ci(ua, "edge");

    if chrome && !edge {
        "Chrome"
    } else if contains_ci(ua, "firefox") {
        "Firefox"
    } else if contains_ci(ua, "safari") && !chrome {
        "Safari"
    } else if edge {
        "Edge"
    } else if contains_ci(ua, "opera") {
        "Opera"
    } else {
        "Unknown"
    }
}

/// Extract a device model name from a user-agent string.
///
/// Android UAs carry the model as the last meaningful `;` segment of the
/// first parenthetical, e.g. `(Linux; Android 14; SM-S928B Build/UP1A)`.
pub fn extract_device_name(ua: &str) -> String {
    if contains_ci(ua, "android") {
        if let Some(caps) = UA_PARENTHETICAL.captures(ua) {
            for segment in caps[1].rsplit(';') {
                let name = ANDROID_BUILD_SUFFIX.replace(segment.trim(), "");
                let name = name.trim();
                let name = name.strip_suffix("wv").unwrap_or(name).trim();
                // Reduced UAs ship placeholder tokens instead of a model
                if name.is_empty()
                    || name.starts_with("Android")
                    || matches!(name, "Linux" | "U" | "K")
                {
                    continue;
                }
                return name.to_string();
            }
        }
    }

    if contains_ci(ua, "iphone") {
        return "iPhone".to_string();
    }
    if contains_ci(ua, "ipad") {
        return "iPad".to_string();
    }
    if contains_ci(ua, "ipod") {
        return "iPod".to_string();
    }
    if contains_ci(ua, "windows") {
        return "Windows PC".to_string();
    }
    if contains_ci(ua, "mac") {
        return "Mac".to_string();
    }

    UNKNOWN_DEVICE.to_string()
}

/// Classify the device form factor from the user agent, touch support and
/// screen dimensions.
pub fn detect_device_type(ua: &str, has_touch: bool, width: u32, height: u32) -> DeviceType {
    let max_dimension = width.max(height);

    if ua.contains("Android") || ua.contains("iPhone") || ua.contains("iPod") {
        return DeviceType::Mobile;
    }

    if ua.contains("iPad") || (has_touch && (768..=1366).contains(&max_dimension)) {
        return DeviceType::Tablet;
    }

    if !has_touch || max_dimension > 1366 {
        return DeviceType::Desktop;
    }

    match max_dimension {
        0..=768 => DeviceType::Mobile,
        769..=1366 => DeviceType::Tablet,
        _ => DeviceType::Desktop,
    }
}

/// Estimate RAM in GB for hosts that do not report it
pub fn estimate_ram(ua: &str, cpu_cores: u32, screen_pixels: u64) -> f64 {
    if ua.contains("iPhone") || ua.contains("iPad") {
        return match screen_pixels {
            p if p > 2_000_000 => 6.0,
            p if p > 1_000_000 => 4.0,
            _ => 2.0,
        };
    }

    if ua.contains("Android") {
        return match (cpu_cores, screen_pixels) {
            (8.., p) if p > 2_000_000 => 8.0,
            (6.., p) if p > 1_500_000 => 6.0,
            (4.., p) if p > 1_000_000 => 4.0,
            _ => 3.0,
        };
    }

    match cpu_cores {
        8.. => 16.0,
        4.. => 8.0,
        _ => 4.0,
    }
}
