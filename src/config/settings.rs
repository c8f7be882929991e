// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Sensitune
//!
//! Handles loading and saving settings from ~/.sensitune/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::device::DeviceType;
use crate::sensitivity::{FingerCount, SensitivityMode};

mod access;
mod io;
mod migration;
mod validation;

pub use access::SETTING_KEYS;

/// Main settings structure, stored in ~/.sensitune/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Defaults used by `calc` when flags are omitted
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Signal collection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Known-device catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Calculation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Finger count, clamped into 2..=6 on load
    #[serde(default = "default_finger_count")]
    pub finger_count: i64,

    #[serde(default)]
    pub mode: SensitivityMode,

    /// Force a device type instead of the detected one
    #[serde(default)]
    pub device_type: Option<DeviceType>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            finger_count: default_finger_count(),
            mode: SensitivityMode::default(),
            device_type: None,
        }
    }
}

/// Detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Probe the local machine with sysinfo
    #[serde(default = "default_true")]
    pub host_probe: bool,

    /// Run the CPU micro-benchmark during the host probe
    #[serde(default = "default_true")]
    pub benchmark: bool,

    /// Browser signal file read on every detection
    #[serde(default)]
    pub signals_path: Option<PathBuf>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            host_probe: true,
            benchmark: true,
            signals_path: None,
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Extra catalog file (defaults to ~/.sensitune/catalog.toml)
    #[serde(default)]
    pub extra_path: Option<PathBuf>,
}

fn default_finger_count() -> i64 {
    FingerCount::default().get() as i64
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Finger count to use when none is given
    pub fn finger_count(&self) -> FingerCount {
        FingerCount::new(self.defaults.finger_count)
    }

    /// User catalog file, configured or the default location
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .extra_path
            .clone()
            .unwrap_or_else(Self::default_catalog_path)
    }
}
