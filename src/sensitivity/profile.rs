// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sensitivity profile and its input types

use serde::{Deserialize, Serialize};

/// Lowest value a final profile may hold
pub const PROFILE_MIN: u32 = 5;
/// Highest value any profile may hold
pub const PROFILE_MAX: u32 = 200;

/// One of the six in-game sensitivity controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    General,
    RedDot,
    #[serde(rename = "scope_2x")]
    Scope2x,
    #[serde(rename = "scope_4x")]
    Scope4x,
    Sniper,
    FreeLook,
}

impl Control {
    /// All controls in display order
    pub const ALL: [Control; 6] = [
        Control::General,
        Control::RedDot,
        Control::Scope2x,
        Control::Scope4x,
        Control::Sniper,
        Control::FreeLook,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Control::General => "general",
            Control::RedDot => "red_dot",
            Control::Scope2x => "scope_2x",
            Control::Scope4x => "scope_4x",
            Control::Sniper => "sniper",
            Control::FreeLook => "free_look",
        }
    }

    /// Translation key for the control label
    pub fn label_key(&self) -> &'static str {
        match self {
            Control::General => "sensitivity_general",
            Control::RedDot => "sensitivity_red_dot",
            Control::Scope2x => "sensitivity_scope_2x",
            Control::Scope4x => "sensitivity_scope_4x",
            Control::Sniper => "sensitivity_sniper",
            Control::FreeLook => "sensitivity_free_look",
        }
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Six named sensitivity values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensitivityProfile {
    pub general: u32,
    pub red_dot: u32,
    pub scope_2x: u32,
    pub scope_4x: u32,
    pub sniper: u32,
    pub free_look: u32,
}

impl SensitivityProfile {
    pub const fn new(
        general: u32,
        red_dot: u32,
        scope_2x: u32,
        scope_4x: u32,
        sniper: u32,
        free_look: u32,
    ) -> Self {
        Self {
            general,
            red_dot,
            scope_2x,
            scope_4x,
            sniper,
            free_look,
        }
    }

    pub fn get(&self, control: Control) -> u32 {
        match control {
            Control::General => self.general,
            Control::RedDot => self.red_dot,
            Control::Scope2x => self.scope_2x,
            Control::Scope4x => self.scope_4x,
            Control::Sniper => self.sniper,
            Control::FreeLook => self.free_look,
        }
    }

    /// Values paired with their control, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Control, u32)> + '_ {
        Control::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Apply `f` to every value
    pub fn map(&self, f: impl Fn(u32) -> u32) -> Self {
        Self {
            general: f(self.general),
            red_dot: f(self.red_dot),
            scope_2x: f(self.scope_2x),
            scope_4x: f(self.scope_4x),
            sniper: f(self.sniper),
            free_look: f(self.free_look),
        }
    }

    /// Whether every value lies in `[min, max]`
    pub fn within(&self, min: u32, max: u32) -> bool {
        self.iter().all(|(_, v)| (min..=max).contains(&v))
    }
}

/// Number of fingers used for control input, always within 2..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct FingerCount(u8);

impl FingerCount {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 6;

    /// Clamp any integer into the supported range
    pub fn new(count: i64) -> Self {
        let clamped = count.clamp(Self::MIN as i64, Self::MAX as i64) as u8;
        if clamped as i64 != count {
            tracing::debug!(requested = count, used = clamped, "finger count clamped");
        }
        Self(clamped)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Position of this count in per-finger tables, 0 for two fingers
    pub fn index(&self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    pub fn all() -> impl Iterator<Item = FingerCount> {
        (Self::MIN..=Self::MAX).map(FingerCount)
    }
}

impl Default for FingerCount {
    fn default() -> Self {
        Self(4)
    }
}

impl From<i64> for FingerCount {
    fn from(count: i64) -> Self {
        Self::new(count)
    }
}

impl From<FingerCount> for u8 {
    fn from(count: FingerCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for FingerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which sensitivity screen the values are meant for. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityMode {
    #[default]
    Game,
    Shoot,
}

impl SensitivityMode {
    pub fn label_key(&self) -> &'static str {
        match self {
            SensitivityMode::Game => "game_sensitivity",
            SensitivityMode::Shoot => "shoot_sensitivity",
        }
    }
}

impl std::fmt::Display for SensitivityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensitivityMode::Game => write!(f, "game"),
            SensitivityMode::Shoot => write!(f, "shoot"),
        }
    }
}

impl std::str::FromStr for SensitivityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "game" => Ok(SensitivityMode::Game),
            "shoot" => Ok(SensitivityMode::Shoot),
            other => Err(format!("unknown sensitivity mode: {}", other)),
        }
    }
}
