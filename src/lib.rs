// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sensitune - device-aware sensitivity recommendations for touch shooters.
//!
//! Browser-reported hardware hints (or a probe of the local machine) are
//! normalized into a device snapshot, classified into a performance tier,
//! and mapped together with the player's finger count to a set of in-game
//! sensitivity values.
//!
//! Architecture highlights:
//! - `device`: signal collection, snapshot normalization, known-device catalog, tier classifier
//! - `sensitivity`: base tables, hardware adjustment, recommendations, confidence
//! - `config`: persisted user settings
//! - `cli`, `commands`: the `sensitune` binary surface

pub mod cli;
pub mod commands;
pub mod config;
pub mod device;
pub mod error;
pub mod sensitivity;

pub use error::{Result, SensituneError};
