// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Known-device catalog
//!
//! Exact-name lookup of pre-vetted devices, partitioned by device type. The
//! built-in table ships as TOML inside the binary and can be extended by a
//! user file with the same layout. A miss is never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::snapshot::DeviceType;
use super::tier::{GpuTier, PerformanceTier, ScreenSizeClass};
use crate::error::{Result, SensituneError};

const BUILTIN_CATALOG: &str = include_str!("../../data/known_devices.toml");

/// A single known device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownDevice {
    pub name: String,
    pub tier: PerformanceTier,
    pub gpu: GpuTier,
    pub screen: ScreenSizeClass,
    /// Model codes that identify the same device, e.g. `SM-S928B`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl KnownDevice {
    /// Exact, case-sensitive match on the name or any alias
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

/// Known devices partitioned by device type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownDeviceCatalog {
    #[serde(default)]
    pub mobile: Vec<KnownDevice>,
    #[serde(default)]
    pub tablet: Vec<KnownDevice>,
    #[serde(default)]
    pub desktop: Vec<KnownDevice>,
}

impl KnownDeviceCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        match Self::from_toml_str(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("built-in device catalog is invalid: {}", e);
                Self::empty()
            }
        }
    }

    /// Parse and validate a catalog from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Built-in catalog extended with an optional user file.
    ///
    /// A broken user file is logged and ignored.
    pub fn load(extra: Option<&Path>) -> Self {
        let mut catalog = Self::builtin();

        if let Some(path) = extra {
            if path.exists() {
                match Self::load_from(path) {
                    Ok(user) => {
                        tracing::debug!(
                            path = %path.display(),
                            devices = user.len(),
                            "loaded user device catalog"
                        );
                        catalog.extend(user);
                    }
                    Err(e) => {
                        tracing::warn!(
                            "ignoring device catalog {}: {}",
                            path.display(),
                            e
                        );
                    }
                }
            } else {
                tracing::debug!(path = %path.display(), "no user device catalog");
            }
        }

        catalog
    }

    fn validate(&self) -> Result<()> {
        for device_type in [DeviceType::Mobile, DeviceType::Tablet, DeviceType::Desktop] {
            let devices = self.devices(device_type);
            for (i, device) in devices.iter().enumerate() {
                if device.name.trim().is_empty() {
                    return Err(SensituneError::Catalog(format!(
                        "{} entry {} has an empty name",
                        device_type,
                        i + 1
                    )));
                }
                if devices[..i].iter().any(|other| other.name == device.name) {
                    return Err(SensituneError::Catalog(format!(
                        "duplicate {} entry: {}",
                        device_type, device.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Merge `other` into this catalog. Entries with the same name replace
    /// the existing ones.
    pub fn extend(&mut self, other: KnownDeviceCatalog) {
        fn merge_into(target: &mut Vec<KnownDevice>, incoming: Vec<KnownDevice>) {
            for device in incoming {
                match target.iter_mut().find(|d| d.name == device.name) {
                    Some(existing) => *existing = device,
                    None => target.push(device),
                }
            }
        }

        merge_into(&mut self.mobile, other.mobile);
        merge_into(&mut self.tablet, other.tablet);
        merge_into(&mut self.desktop, other.desktop);
    }

    /// Devices listed for a device type. Unknown devices have no partition.
    pub fn devices(&self, device_type: DeviceType) -> &[KnownDevice] {
        match device_type {
            DeviceType::Mobile => &self.mobile,
            DeviceType::Tablet => &self.tablet,
            DeviceType::Desktop => &self.desktop,
            DeviceType::Unknown => &[],
        }
    }

    /// Exact-match lookup within a device type
    pub fn lookup(&self, device_type: DeviceType, name: &str) -> Option<&KnownDevice> {
        let found = self.devices(device_type).iter().find(|d| d.matches(name));
        if let Some(device) = found {
            tracing::debug!(name, matched = %device.name, tier = %device.tier, "catalog match");
        }
        found
    }

    pub fn len(&self) -> usize {
        self.mobile.len() + self.tablet.len() + self.desktop.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
