// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device detection and classification
//!
//! Raw host signals are collected, normalized into a `DeviceSnapshot`, and
//! classified into a performance tier with help from the known-device catalog.

pub mod catalog;
pub mod collector;
pub mod signals;
pub mod snapshot;
pub mod tier;
pub mod user_agent;

pub use catalog::*;
pub use collector::*;
pub use signals::*;
pub use snapshot::*;
pub use tier::*;
pub use user_agent::OsInfo;
