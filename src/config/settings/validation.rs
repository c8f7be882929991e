// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::device::DeviceType;
use crate::sensitivity::FingerCount;

use super::Settings;

impl Settings {
    /// Repair out-of-range values in place. Returns a warning per repair.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        let requested = self.defaults.finger_count;
        let clamped = FingerCount::new(requested).get() as i64;
        if clamped != requested {
            warnings.push(format!(
                "defaults.finger_count {} is outside {}..={}, using {}",
                requested,
                FingerCount::MIN,
                FingerCount::MAX,
                clamped
            ));
            self.defaults.finger_count = clamped;
        }

        if self.defaults.device_type == Some(DeviceType::Unknown) {
            warnings.push("defaults.device_type \"unknown\" has no table, ignoring".to_string());
            self.defaults.device_type = None;
        }

        if let Some(ref path) = self.catalog.extra_path {
            if !path.exists() {
                warnings.push(format!(
                    "catalog.extra_path {} does not exist",
                    path.display()
                ));
            }
        }

        if !self.detection.host_probe && self.detection.signals_path.is_none() {
            warnings.push(
                "detection has no signal source configured, results will use fallback values"
                    .to_string(),
            );
        }

        warnings
    }
}
