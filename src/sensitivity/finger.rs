// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Finger-count control schemes

use serde::Serialize;

use super::profile::FingerCount;

/// Static description of a finger-count control scheme. Text fields are
/// translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerProfile {
    pub finger_count: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
    pub recommended_for: &'static [&'static str],
    /// Ratio applied on top of the hardware-adjusted profile
    pub sensitivity_modifier: f64,
}

const FINGER_PROFILES: [FingerProfile; 5] = [
    FingerProfile {
        finger_count: 2,
        name: "fingers_2_name",
        description: "fingers_2_desc",
        advantages: &["fingers_2_feat1", "fingers_2_feat2"],
        disadvantages: &["disadvantages_2_1", "disadvantages_2_2"],
        recommended_for: &["recommended_for_2_1", "recommended_for_2_2"],
        sensitivity_modifier: 0.0,
    },
    FingerProfile {
        finger_count: 3,
        name: "fingers_3_name",
        description: "fingers_3_desc",
        advantages: &["fingers_3_feat1", "fingers_3_feat2"],
        disadvantages: &["disadvantages_3_1", "disadvantages_3_2"],
        recommended_for: &["recommended_for_3_1", "recommended_for_3_2"],
        sensitivity_modifier: 0.05,
    },
    FingerProfile {
        finger_count: 4,
        name: "fingers_4_name",
        description: "fingers_4_desc",
        advantages: &["fingers_4_feat1", "fingers_4_feat2"],
        disadvantages: &["disadvantages_4_1", "disadvantages_4_2"],
        recommended_for: &["recommended_for_4_1", "recommended_for_4_2"],
        sensitivity_modifier: 0.1,
    },
    FingerProfile {
        finger_count: 5,
        name: "fingers_5_name",
        description: "fingers_5_desc",
        advantages: &["fingers_5_feat1", "fingers_5_feat2"],
        disadvantages: &["disadvantages_5_1", "disadvantages_5_2"],
        recommended_for: &["recommended_for_5_1", "recommended_for_5_2"],
        sensitivity_modifier: 0.15,
    },
    FingerProfile {
        finger_count: 6,
        name: "fingers_6_name",
        description: "fingers_6_desc",
        advantages: &["fingers_6_feat1", "fingers_6_feat2"],
        disadvantages: &["disadvantages_6_1", "disadvantages_6_2"],
        recommended_for: &["recommended_for_6_1", "recommended_for_6_2"],
        sensitivity_modifier: 0.2,
    },
];

/// Profile for a finger count
pub fn finger_profile(fingers: FingerCount) -> &'static FingerProfile {
    &FINGER_PROFILES[fingers.index()]
}

/// Every profile, two fingers first
pub fn all_finger_profiles() -> &'static [FingerProfile] {
    &FINGER_PROFILES
}
