// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use crate::device::DeviceType;
use crate::error::{Result, SensituneError};
use crate::sensitivity::SensitivityMode;

use super::Settings;

/// Keys accepted by `get` and `set`
pub const SETTING_KEYS: &[&str] = &[
    "defaults.finger_count",
    "defaults.mode",
    "defaults.device_type",
    "detection.host_probe",
    "detection.benchmark",
    "detection.signals_path",
    "catalog.extra_path",
];

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(SensituneError::InvalidInput(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}

/// Empty values and "none" clear optional settings
fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("none")
}

fn unknown_key(key: &str) -> SensituneError {
    SensituneError::Config(format!(
        "unknown setting '{}' (expected one of: {})",
        key,
        SETTING_KEYS.join(", ")
    ))
}

impl Settings {
    /// Read a setting as display text
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "defaults.finger_count" => self.defaults.finger_count.to_string(),
            "defaults.mode" => self.defaults.mode.to_string(),
            "defaults.device_type" => self
                .defaults
                .device_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "auto".to_string()),
            "detection.host_probe" => self.detection.host_probe.to_string(),
            "detection.benchmark" => self.detection.benchmark.to_string(),
            "detection.signals_path" => self
                .detection
                .signals_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string()),
            "catalog.extra_path" => self.catalog_path().display().to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Parse and store a setting
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.finger_count" => {
                let count: i64 = value.trim().parse().map_err(|_| {
                    SensituneError::InvalidInput(format!(
                        "defaults.finger_count expects an integer, got '{}'",
                        value
                    ))
                })?;
                self.defaults.finger_count = count;
            }
            "defaults.mode" => {
                self.defaults.mode = value
                    .parse::<SensitivityMode>()
                    .map_err(SensituneError::InvalidInput)?;
            }
            "defaults.device_type" => {
                self.defaults.device_type = if is_unset(value) || value.trim() == "auto" {
                    None
                } else {
                    Some(
                        value
                            .parse::<DeviceType>()
                            .map_err(SensituneError::InvalidInput)?,
                    )
                };
            }
            "detection.host_probe" => self.detection.host_probe = parse_bool(key, value)?,
            "detection.benchmark" => self.detection.benchmark = parse_bool(key, value)?,
            "detection.signals_path" => {
                self.detection.signals_path =
                    (!is_unset(value)).then(|| PathBuf::from(value.trim()));
            }
            "catalog.extra_path" => {
                self.catalog.extra_path = (!is_unset(value)).then(|| PathBuf::from(value.trim()));
            }
            _ => return Err(unknown_key(key)),
        }

        for warning in self.validate() {
            tracing::warn!("{}", warning);
        }
        Ok(())
    }
}
