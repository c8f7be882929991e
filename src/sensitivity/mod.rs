// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sensitivity generation
//!
//! Base table lookup, hardware and finger adjustment, recommendations and
//! confidence. Every function here is pure.

pub mod adjust;
pub mod calculator;
pub mod confidence;
pub mod finger;
pub mod profile;
pub mod recommend;
pub mod table;

pub use adjust::{adjust, apply_ratio, AdjustmentFactors};
pub use calculator::{SensitivityCalculator, SensitivityResult};
pub use confidence::confidence;
pub use finger::{all_finger_profiles, finger_profile, FingerProfile};
pub use profile::*;
pub use recommend::{recommend, Recommendation};
pub use table::{base_profile, fallback_profile, table_entry};
