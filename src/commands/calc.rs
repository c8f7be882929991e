// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sensitivity calculation command

use crate::cli::args::{CalcArgs, OutputFormat};
use crate::config::Settings;
use crate::device::DeviceSnapshot;
use crate::error::Result;
use crate::sensitivity::{SensitivityCalculator, SensitivityResult};

use super::{build_detector, load_catalog};

/// Execute the calc command
pub async fn execute(args: &CalcArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let detector = build_detector(settings, &args.signals);
    let snapshot = apply_overrides(detector.detect().await, args, settings);

    let calculator = SensitivityCalculator::new(load_catalog(settings, false));
    let fingers = args.fingers.unwrap_or(settings.defaults.finger_count);
    let mode = args.mode.unwrap_or(settings.defaults.mode);
    let result = calculator.calculate(&snapshot, fingers, mode);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if args.plain {
        println!("{}", result.settings_text());
        return Ok(());
    }

    print!("{}", render_text(&snapshot, &result));
    Ok(())
}

/// A device type from the command line beats the one in settings,
/// which beats detection.
fn apply_overrides(snapshot: DeviceSnapshot, args: &CalcArgs, settings: &Settings) -> DeviceSnapshot {
    match args.device_type.or(settings.defaults.device_type) {
        Some(device_type) if device_type != snapshot.device_type => {
            tracing::debug!(
                detected = %snapshot.device_type,
                chosen = %device_type,
                "overriding device type"
            );
            snapshot.with_device_type(device_type)
        }
        _ => snapshot,
    }
}

fn render_text(snapshot: &DeviceSnapshot, result: &SensitivityResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n=== {} ({}) ===\n\n",
        result.mode.label_key(),
        snapshot.device_name
    ));
    out.push_str(&format!(
        "Device: {}, {} tier\n",
        result.device_type, result.tier
    ));
    out.push_str(&format!(
        "Fingers: {} ({})\n",
        result.finger_count, result.finger_profile.name
    ));
    out.push_str(&format!("Confidence: {}%\n", result.confidence));
    if result.fallback {
        out.push_str("Using fallback values: device type could not be matched to a table\n");
    }

    out.push('\n');
    out.push_str(&result.settings_text());
    out.push('\n');

    out.push_str("\n=== Recommendations ===\n\n");
    for recommendation in &result.recommendations {
        out.push_str(&format!("  • {}\n", recommendation));
    }

    let compat = &result.compatibility;
    out.push_str("\n=== Compatibility ===\n\n");
    out.push_str(&format!("Support: {}\n", compat.support));
    out.push_str(&format!("Graphics: {}\n", compat.recommended_graphics));
    out.push_str(&format!("Expected FPS: {}\n", compat.fps_range()));
    out.push_str(&format!("Battery: {}\n", compat.battery_life));
    out.push_str(&format!("Heating: {}\n", compat.heating));

    out.push('\n');
    out
}
