// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Base sensitivity table
//!
//! Device type × performance tier × finger count, before any hardware or
//! finger adjustment is applied.

use super::profile::{FingerCount, SensitivityProfile};
use crate::device::{DeviceType, PerformanceTier};

const DEVICE_SLOTS: usize = 3;
const TIER_SLOTS: usize = 3;
const FINGER_SLOTS: usize = (FingerCount::MAX - FingerCount::MIN + 1) as usize;

const fn p(
    general: u32,
    red_dot: u32,
    scope_2x: u32,
    scope_4x: u32,
    sniper: u32,
    free_look: u32,
) -> SensitivityProfile {
    SensitivityProfile::new(general, red_dot, scope_2x, scope_4x, sniper, free_look)
}

const BASE_TABLE: [[[SensitivityProfile; FINGER_SLOTS]; TIER_SLOTS]; DEVICE_SLOTS] = [
    // mobile
    [
        // low
        [
            p(85, 75, 65, 55, 35, 70),
            p(90, 80, 70, 60, 40, 75),
            p(95, 85, 75, 65, 45, 80),
            p(100, 90, 80, 70, 50, 85),
            p(105, 95, 85, 75, 55, 90),
        ],
        // medium
        [
            p(90, 80, 70, 60, 40, 75),
            p(95, 85, 75, 65, 45, 80),
            p(100, 90, 80, 70, 50, 85),
            p(105, 95, 85, 75, 55, 90),
            p(110, 100, 90, 80, 60, 95),
        ],
        // high
        [
            p(95, 85, 75, 65, 45, 80),
            p(100, 90, 80, 70, 50, 85),
            p(105, 95, 85, 75, 55, 90),
            p(110, 100, 90, 80, 60, 95),
            p(115, 105, 95, 85, 65, 100),
        ],
    ],
    // tablet
    [
        // low
        [
            p(75, 65, 55, 45, 25, 60),
            p(80, 70, 60, 50, 30, 65),
            p(85, 75, 65, 55, 35, 70),
            p(90, 80, 70, 60, 40, 75),
            p(95, 85, 75, 65, 45, 80),
        ],
        // medium
        [
            p(80, 70, 60, 50, 30, 65),
            p(85, 75, 65, 55, 35, 70),
            p(90, 80, 70, 60, 40, 75),
            p(95, 85, 75, 65, 45, 80),
            p(100, 90, 80, 70, 50, 85),
        ],
        // high
        [
            p(85, 75, 65, 55, 35, 70),
            p(90, 80, 70, 60, 40, 75),
            p(95, 85, 75, 65, 45, 80),
            p(100, 90, 80, 70, 50, 85),
            p(105, 95, 85, 75, 55, 90),
        ],
    ],
    // desktop
    [
        // low
        [
            p(65, 55, 45, 35, 15, 50),
            p(70, 60, 50, 40, 20, 55),
            p(75, 65, 55, 45, 25, 60),
            p(80, 70, 60, 50, 30, 65),
            p(85, 75, 65, 55, 35, 70),
        ],
        // medium
        [
            p(70, 60, 50, 40, 20, 55),
            p(75, 65, 55, 45, 25, 60),
            p(80, 70, 60, 50, 30, 65),
            p(85, 75, 65, 55, 35, 70),
            p(90, 80, 70, 60, 40, 75),
        ],
        // high
        [
            p(75, 65, 55, 45, 25, 60),
            p(80, 70, 60, 50, 30, 65),
            p(85, 75, 65, 55, 35, 70),
            p(90, 80, 70, 60, 40, 75),
            p(95, 85, 75, 65, 45, 80),
        ],
    ],
];

const MOBILE_FALLBACK: SensitivityProfile = p(95, 85, 75, 65, 45, 80);
const TABLET_FALLBACK: SensitivityProfile = p(85, 75, 65, 55, 35, 70);
const DESKTOP_FALLBACK: SensitivityProfile = p(75, 65, 55, 45, 25, 60);

fn device_slot(device_type: DeviceType) -> Option<usize> {
    match device_type {
        DeviceType::Mobile => Some(0),
        DeviceType::Tablet => Some(1),
        DeviceType::Desktop => Some(2),
        DeviceType::Unknown => None,
    }
}

fn tier_slot(tier: PerformanceTier) -> usize {
    match tier {
        PerformanceTier::Low => 0,
        PerformanceTier::Medium => 1,
        PerformanceTier::High => 2,
    }
}

/// Table entry for a combination, `None` when the device type has no table
pub fn table_entry(
    device_type: DeviceType,
    tier: PerformanceTier,
    fingers: FingerCount,
) -> Option<SensitivityProfile> {
    let device = device_slot(device_type)?;
    BASE_TABLE
        .get(device)
        .and_then(|tiers| tiers.get(tier_slot(tier)))
        .and_then(|row| row.get(fingers.index()))
        .copied()
}

/// Baseline profile before adjustment.
///
/// Combinations without a table entry use the device type's fallback profile.
pub fn base_profile(
    device_type: DeviceType,
    tier: PerformanceTier,
    fingers: FingerCount,
) -> SensitivityProfile {
    table_entry(device_type, tier, fingers).unwrap_or_else(|| {
        tracing::warn!(%device_type, %tier, %fingers, "no base table entry, using fallback profile");
        fallback_profile(device_type)
    })
}

/// Fixed profile used when calculation cannot proceed. Unknown devices get
/// the mobile values.
pub fn fallback_profile(device_type: DeviceType) -> SensitivityProfile {
    match device_type {
        DeviceType::Tablet => TABLET_FALLBACK,
        DeviceType::Desktop => DESKTOP_FALLBACK,
        DeviceType::Mobile | DeviceType::Unknown => MOBILE_FALLBACK,
    }
}
