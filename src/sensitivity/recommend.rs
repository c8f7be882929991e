// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Recommendation identifiers
//!
//! Recommendations are translation keys, optionally carrying parameters in
//! the `key|param1|param2` form. Resolving them to text is up to the caller.

use serde::{Serialize, Serializer};

use super::finger::finger_profile;
use super::profile::FingerCount;
use crate::device::{DeviceSnapshot, DeviceType, PerformanceTier};

const LOW_TIER_TIPS: [&str; 3] = [
    "low_performance_recommendation_1",
    "low_performance_recommendation_2",
    "low_performance_recommendation_3",
];
const HIGH_TIER_TIPS: [&str; 2] = [
    "high_performance_recommendation_1",
    "high_performance_recommendation_2",
];

pub const ADVANCED_TRAINING_TIP: &str = "advanced_finger_training_tip";
pub const ADVANCED_HOLDER_TIP: &str = "advanced_finger_holder_tip";
pub const LARGE_SCREEN_TIP: &str = "large_screen_needed_tip";
pub const UPGRADE_TIP: &str = "consider_upgrade_tip";
pub const FALLBACK_TIP: &str = "fallback_sensitivity_tip";

const FINGER_STYLE_PREFIX: &str = "finger_style_recommendation_prefix";
const FINGER_ADVANTAGE_PREFIX: &str = "finger_style_advantage_prefix";

/// A single piece of advice for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Plain translation key
    Tip(&'static str),
    /// Chosen finger style, with its name and description keys
    FingerStyle {
        name: &'static str,
        description: &'static str,
    },
    /// One advantage of the chosen finger style
    FingerAdvantage(&'static str),
}

impl Recommendation {
    /// Key without parameters
    pub fn key(&self) -> &'static str {
        match self {
            Recommendation::Tip(key) => *key,
            Recommendation::FingerStyle { .. } => FINGER_STYLE_PREFIX,
            Recommendation::FingerAdvantage(_) => FINGER_ADVANTAGE_PREFIX,
        }
    }

    /// Interpolation parameters, in order
    pub fn params(&self) -> Vec<&'static str> {
        match self {
            Recommendation::Tip(_) => Vec::new(),
            Recommendation::FingerStyle { name, description } => vec![*name, *description],
            Recommendation::FingerAdvantage(advantage) => vec![*advantage],
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())?;
        for param in self.params() {
            write!(f, "|{}", param)?;
        }
        Ok(())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered advice for a snapshot, finger count and tier
pub fn recommend(
    snapshot: &DeviceSnapshot,
    fingers: FingerCount,
    tier: PerformanceTier,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    match tier {
        PerformanceTier::Low => {
            recommendations.extend(LOW_TIER_TIPS.into_iter().map(Recommendation::Tip))
        }
        PerformanceTier::High => {
            recommendations.extend(HIGH_TIER_TIPS.into_iter().map(Recommendation::Tip))
        }
        PerformanceTier::Medium => {}
    }

    let profile = finger_profile(fingers);
    recommendations.push(Recommendation::FingerStyle {
        name: profile.name,
        description: profile.description,
    });
    recommendations.extend(
        profile
            .advantages
            .iter()
            .copied()
            .map(Recommendation::FingerAdvantage),
    );

    if fingers.get() >= 4 {
        recommendations.push(Recommendation::Tip(ADVANCED_TRAINING_TIP));
        recommendations.push(Recommendation::Tip(ADVANCED_HOLDER_TIP));
    }

    if snapshot.device_type == DeviceType::Mobile && fingers.get() >= 5 {
        recommendations.push(Recommendation::Tip(LARGE_SCREEN_TIP));
    }

    if snapshot.ram_gb > 0.0 && snapshot.ram_gb < 4.0 {
        recommendations.push(Recommendation::Tip(UPGRADE_TIP));
    }

    recommendations
}
