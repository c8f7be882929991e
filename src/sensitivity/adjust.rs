// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware and finger-count adjustment
//!
//! Four independent step-function ratios (RAM, cores, GPU tier, screen size)
//! are summed into one total and applied to every value. The finger modifier
//! is applied afterwards to the hardware-normalized profile.

use serde::Serialize;

use super::finger::finger_profile;
use super::profile::{FingerCount, SensitivityProfile, PROFILE_MAX, PROFILE_MIN};
use crate::device::{DeviceSnapshot, GpuClass, GpuTier, ScreenSizeClass};

/// Lower bound after the hardware pass
pub const HARDWARE_PASS_MIN: u32 = 10;

/// (threshold GB, ratio), ascending
const RAM_STEPS: &[(f64, f64)] = &[
    (2.0, -0.10),
    (3.0, -0.05),
    (4.0, 0.0),
    (6.0, 0.05),
    (8.0, 0.10),
    (12.0, 0.15),
    (16.0, 0.20),
];

/// (threshold cores, ratio), ascending
const CPU_STEPS: &[(f64, f64)] = &[(2.0, -0.10), (4.0, 0.0), (6.0, 0.05), (8.0, 0.10)];

/// Ratio of the highest threshold not above `value`. Values below every
/// threshold get `default`.
fn step_ratio(steps: &[(f64, f64)], value: f64, default: f64) -> f64 {
    steps
        .iter()
        .rev()
        .find(|(threshold, _)| *threshold <= value)
        .map(|(_, ratio)| *ratio)
        .unwrap_or(default)
}

pub fn ram_ratio(ram_gb: f64) -> f64 {
    step_ratio(RAM_STEPS, ram_gb, 0.0)
}

pub fn cpu_ratio(cores: u32) -> f64 {
    step_ratio(CPU_STEPS, cores as f64, 0.0)
}

pub fn gpu_ratio(tier: GpuTier) -> f64 {
    match tier {
        GpuTier::Low => -0.15,
        GpuTier::Medium => 0.0,
        GpuTier::High => 0.10,
        GpuTier::Flagship => 0.20,
    }
}

pub fn screen_ratio(size: ScreenSizeClass) -> f64 {
    match size {
        ScreenSizeClass::Small => 0.10,
        ScreenSizeClass::Medium => 0.0,
        ScreenSizeClass::Large => -0.05,
        ScreenSizeClass::XLarge => -0.10,
    }
}

/// Individual hardware ratios for a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentFactors {
    pub ram: f64,
    pub cpu: f64,
    pub gpu: f64,
    pub screen: f64,
}

impl AdjustmentFactors {
    pub fn for_snapshot(snapshot: &DeviceSnapshot) -> Self {
        let gpu_tier = GpuClass::detect(&snapshot.gpu_descriptor).tier();
        let screen = ScreenSizeClass::estimate(
            snapshot.device_type,
            snapshot.screen_width_px,
            snapshot.screen_height_px,
        );

        Self {
            ram: ram_ratio(snapshot.ram_gb),
            cpu: cpu_ratio(snapshot.cpu_cores),
            gpu: gpu_ratio(gpu_tier),
            screen: screen_ratio(screen),
        }
    }

    pub fn total(&self) -> f64 {
        self.ram + self.cpu + self.gpu + self.screen
    }
}

/// Scale every value by `1 + ratio`, round, and clamp into `[min, max]`
pub fn apply_ratio(profile: &SensitivityProfile, ratio: f64, min: u32, max: u32) -> SensitivityProfile {
    profile.map(|value| {
        let scaled = (value as f64 * (1.0 + ratio)).round();
        scaled.clamp(min as f64, max as f64) as u32
    })
}

/// Hardware pass followed by the finger-count pass
pub fn adjust(
    base: &SensitivityProfile,
    snapshot: &DeviceSnapshot,
    fingers: FingerCount,
) -> SensitivityProfile {
    let factors = AdjustmentFactors::for_snapshot(snapshot);
    let total = factors.total();
    let modifier = finger_profile(fingers).sensitivity_modifier;

    tracing::debug!(
        ram = factors.ram,
        cpu = factors.cpu,
        gpu = factors.gpu,
        screen = factors.screen,
        total,
        modifier,
        "sensitivity adjustment"
    );

    let hardware = apply_ratio(base, total, HARDWARE_PASS_MIN, PROFILE_MAX);
    apply_ratio(&hardware, modifier, PROFILE_MIN, PROFILE_MAX)
}
