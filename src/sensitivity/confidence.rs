// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Confidence in a calculated profile
//!
//! A heuristic over which signals were actually reported. Not calibrated.

use crate::device::{DeviceSnapshot, KnownDeviceCatalog};

const BASE_CONFIDENCE: u32 = 50;
/// Confidence reported for fallback results
pub const FALLBACK_CONFIDENCE: u8 = 30;

/// Confidence score in `[0, 100]`
pub fn confidence(snapshot: &DeviceSnapshot, catalog: &KnownDeviceCatalog) -> u8 {
    let mut score = BASE_CONFIDENCE;

    if snapshot.device_name_known() {
        score += 15;
    }
    if snapshot.availability.device_memory {
        score += 10;
    }
    if snapshot.availability.hardware_concurrency {
        score += 10;
    }
    if snapshot.gpu_resolved() {
        score += 10;
    }
    if snapshot.detection_accuracy > 70 {
        score += 15;
    }
    if catalog
        .lookup(snapshot.device_type, &snapshot.device_name)
        .is_some()
    {
        score += 20;
    }

    score.min(100) as u8
}
