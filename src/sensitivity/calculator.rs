// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! End-to-end sensitivity calculation

use serde::Serialize;

use super::adjust::adjust;
use super::confidence::{confidence, FALLBACK_CONFIDENCE};
use super::finger::{finger_profile, FingerProfile};
use super::profile::{FingerCount, SensitivityMode, SensitivityProfile};
use super::recommend::{recommend, Recommendation, FALLBACK_TIP};
use super::table::{fallback_profile, table_entry};
use crate::device::{
    classify, CompatibilityInfo, DeviceSnapshot, DeviceType, KnownDeviceCatalog, PerformanceTier,
};

/// Everything the presentation layer needs for one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityResult {
    pub sensitivity: SensitivityProfile,
    pub tier: PerformanceTier,
    pub device_type: DeviceType,
    pub finger_count: FingerCount,
    pub finger_profile: FingerProfile,
    pub recommendations: Vec<Recommendation>,
    pub confidence: u8,
    pub mode: SensitivityMode,
    pub compatibility: CompatibilityInfo,
    /// True when the fixed fallback profile was returned
    pub fallback: bool,
}

impl SensitivityResult {
    /// Fixed result used when no table applies to the device
    pub fn fallback(device_type: DeviceType, fingers: FingerCount, mode: SensitivityMode) -> Self {
        let tier = PerformanceTier::Medium;
        Self {
            sensitivity: fallback_profile(device_type),
            tier,
            device_type,
            finger_count: fingers,
            finger_profile: *finger_profile(fingers),
            recommendations: vec![Recommendation::Tip(FALLBACK_TIP)],
            confidence: FALLBACK_CONFIDENCE,
            mode,
            compatibility: tier.compatibility(),
            fallback: true,
        }
    }

    /// One `label_key: value` line per control, in display order
    pub fn settings_text(&self) -> String {
        self.sensitivity
            .iter()
            .map(|(control, value)| format!("{}: {}", control.label_key(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs the classification and sensitivity pipeline against a catalog
#[derive(Debug, Clone, Default)]
pub struct SensitivityCalculator {
    catalog: KnownDeviceCatalog,
}

impl SensitivityCalculator {
    pub fn new(catalog: KnownDeviceCatalog) -> Self {
        Self { catalog }
    }

    /// Calculator backed by the built-in catalog
    pub fn builtin() -> Self {
        Self::new(KnownDeviceCatalog::builtin())
    }

    pub fn catalog(&self) -> &KnownDeviceCatalog {
        &self.catalog
    }

    /// Classify the snapshot only
    pub fn tier(&self, snapshot: &DeviceSnapshot) -> PerformanceTier {
        classify(snapshot, &self.catalog)
    }

    /// Full calculation. Never fails: combinations without a table entry
    /// produce the fallback result.
    pub fn calculate(
        &self,
        snapshot: &DeviceSnapshot,
        finger_count: i64,
        mode: SensitivityMode,
    ) -> SensitivityResult {
        let fingers = FingerCount::new(finger_count);
        let tier = self.tier(snapshot);

        let Some(base) = table_entry(snapshot.device_type, tier, fingers) else {
            tracing::warn!(
                device_type = %snapshot.device_type,
                "no sensitivity table for device type, using fallback"
            );
            return SensitivityResult::fallback(snapshot.device_type, fingers, mode);
        };

        let sensitivity = adjust(&base, snapshot, fingers);
        let result = SensitivityResult {
            sensitivity,
            tier,
            device_type: snapshot.device_type,
            finger_count: fingers,
            finger_profile: *finger_profile(fingers),
            recommendations: recommend(snapshot, fingers, tier),
            confidence: confidence(snapshot, &self.catalog),
            mode,
            compatibility: tier.compatibility(),
            fallback: false,
        };

        tracing::debug!(
            tier = %result.tier,
            fingers = %result.finger_count,
            confidence = result.confidence,
            "sensitivity calculated"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::SignalAvailability;

    fn flagship() -> DeviceSnapshot {
        DeviceSnapshot {
            device_type: DeviceType::Mobile,
            device_name: "SM-S928B".to_string(),
            ram_gb: 12.0,
            cpu_cores: 8,
            gpu_descriptor: "Adreno 750".to_string(),
            screen_width_px: 1440,
            screen_height_px: 3120,
            overall_performance_score: 90,
            detection_accuracy: 90,
            availability: SignalAvailability {
                device_memory: true,
                hardware_concurrency: true,
                connection: true,
                battery: false,
            },
            ..DeviceSnapshot::fallback()
        }
    }

    #[test]
    fn test_flagship_calculation() {
        let calculator = SensitivityCalculator::builtin();
        let result = calculator.calculate(&flagship(), 4, SensitivityMode::Game);

        assert!(!result.fallback);
        assert_eq!(result.tier, PerformanceTier::High);
        assert_eq!(result.finger_count.get(), 4);
        assert_eq!(result.finger_profile.name, "fingers_4_name");
        assert_eq!(result.confidence, 100);
        assert_eq!(result.compatibility.fps_range(), "60-90");
        // base 105, * 1.4 = 147, * 1.1 = 161.7
        assert_eq!(result.sensitivity.general, 162);
        assert!(result
            .recommendations
            .contains(&Recommendation::Tip("high_performance_recommendation_1")));
    }

    #[test]
    fn test_finger_count_is_clamped() {
        let calculator = SensitivityCalculator::builtin();
        let snapshot = flagship();
        assert_eq!(
            calculator.calculate(&snapshot, 1, SensitivityMode::Game),
            calculator.calculate(&snapshot, 2, SensitivityMode::Game)
        );
        assert_eq!(
            calculator.calculate(&snapshot, 9, SensitivityMode::Game),
            calculator.calculate(&snapshot, 6, SensitivityMode::Game)
        );
    }

    #[test]
    fn test_mode_is_informational() {
        let calculator = SensitivityCalculator::builtin();
        let game = calculator.calculate(&flagship(), 3, SensitivityMode::Game);
        let shoot = calculator.calculate(&flagship(), 3, SensitivityMode::Shoot);
        assert_eq!(game.sensitivity, shoot.sensitivity);
        assert_eq!(shoot.mode, SensitivityMode::Shoot);
    }

    #[test]
    fn test_unknown_device_gets_fallback_result() {
        let calculator = SensitivityCalculator::builtin();
        let result = calculator.calculate(&DeviceSnapshot::fallback(), 5, SensitivityMode::Game);

        assert!(result.fallback);
        assert_eq!(result.tier, PerformanceTier::Medium);
        assert_eq!(result.sensitivity, fallback_profile(DeviceType::Mobile));
        assert_eq!(result.recommendations, vec![Recommendation::Tip(FALLBACK_TIP)]);
        assert_eq!(result.confidence, 30);
        assert_eq!(result.finger_count.get(), 5);
    }

    #[test]
    fn test_settings_text() {
        let result = SensitivityResult::fallback(
            DeviceType::Tablet,
            FingerCount::new(4),
            SensitivityMode::Game,
        );
        assert_eq!(
            result.settings_text(),
            "sensitivity_general: 85\n\
             sensitivity_red_dot: 75\n\
             sensitivity_scope_2x: 65\n\
             sensitivity_scope_4x: 55\n\
             sensitivity_sniper: 35\n\
             sensitivity_free_look: 70"
        );
    }

    #[test]
    fn test_result_serializes() {
        let calculator = SensitivityCalculator::builtin();
        let result = calculator.calculate(&flagship(), 4, SensitivityMode::Shoot);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["tier"], "high");
        assert_eq!(json["deviceType"], "mobile");
        assert_eq!(json["fingerCount"], 4);
        assert_eq!(json["mode"], "shoot");
        assert_eq!(json["sensitivity"]["general"], 162);
        assert_eq!(json["fingerProfile"]["sensitivityModifier"], 0.1);
        assert!(json["recommendations"][0].is_string());
    }
}
