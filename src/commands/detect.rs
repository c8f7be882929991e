// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device detection command

use serde::Serialize;

use crate::cli::args::{DetectArgs, OutputFormat};
use crate::config::Settings;
use crate::device::{
    DeviceSnapshot, DisplaySummary, GpuClass, GpuTier, PerformanceTier, ScreenSizeClass,
};
use crate::error::Result;

use super::{build_detector, load_catalog};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectReport {
    summary: DisplaySummary,
    tier: PerformanceTier,
    screen_size: ScreenSizeClass,
    gpu_tier: GpuTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<DeviceSnapshot>,
}

impl DetectReport {
    fn new(snapshot: DeviceSnapshot, tier: PerformanceTier, detailed: bool) -> Self {
        Self {
            summary: snapshot.display_summary(),
            tier,
            screen_size: ScreenSizeClass::estimate(
                snapshot.device_type,
                snapshot.screen_width_px,
                snapshot.screen_height_px,
            ),
            gpu_tier: GpuClass::detect(&snapshot.gpu_descriptor).tier(),
            snapshot: detailed.then_some(snapshot),
        }
    }
}

/// Execute the detect command
pub async fn execute(args: &DetectArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let detector = build_detector(settings, &args.signals);
    let snapshot = detector.detect().await;
    let catalog = load_catalog(settings, false);
    let tier = crate::device::classify(&snapshot, &catalog);

    let report = DetectReport::new(snapshot, tier, args.detailed);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_text(&report));
    Ok(())
}

fn render_text(report: &DetectReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str("\n=== Device ===\n\n");
    out.push_str(&format!("Name: {}\n", summary.device_name));
    out.push_str(&format!("Type: {}\n", summary.device_type));
    out.push_str(&format!("OS: {}\n", summary.os));
    out.push_str(&format!("RAM: {}\n", summary.ram));
    out.push_str(&format!("CPU: {}\n", summary.cpu));
    out.push_str(&format!("GPU: {} ({})\n", summary.gpu, report.gpu_tier));
    out.push_str(&format!(
        "Screen: {} ({})\n",
        summary.resolution, report.screen_size
    ));
    out.push_str(&format!("Touch points: {}\n", summary.touch_points));

    out.push_str("\n=== Assessment ===\n\n");
    out.push_str(&format!("Performance tier: {}\n", report.tier));
    out.push_str(&format!("Performance score: {}/100\n", summary.performance_score));
    out.push_str(&format!("Detection accuracy: {}%\n", summary.accuracy));

    if let Some(ref snapshot) = report.snapshot {
        out.push_str("\n=== Signals ===\n\n");
        out.push_str(&format!("Browser: {}\n", snapshot.browser));
        out.push_str(&format!("Platform: {}\n", snapshot.platform));
        out.push_str(&format!(
            "Viewport: {}×{}\n",
            snapshot.viewport_width_px, snapshot.viewport_height_px
        ));
        out.push_str(&format!(
            "Pixel ratio: {} (~{} ppi)\n",
            snapshot.pixel_ratio, snapshot.pixel_density
        ));
        out.push_str(&format!("Color depth: {} bit\n", snapshot.color_depth));
        out.push_str(&format!(
            "Network: {} ({} Mbps, {} ms)\n",
            snapshot.network.effective_type, snapshot.network.downlink_mbps, snapshot.network.rtt_ms
        ));
        out.push_str(&format!(
            "JS benchmark: {}\n",
            score_text(snapshot.js_benchmark_score)
        ));
        out.push_str(&format!(
            "WebGL benchmark: {}\n",
            score_text(snapshot.webgl_benchmark_score)
        ));
        out.push_str(&format!(
            "Detected at: {}\n",
            snapshot.detected_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    } else {
        out.push_str("\nRun 'sensitune detect --detailed' to see every signal\n");
    }

    out.push('\n');
    out
}

fn score_text(score: Option<u8>) -> String {
    score
        .map(|s| format!("{}/100", s))
        .unwrap_or_else(|| "not run".to_string())
}
