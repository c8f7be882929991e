// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Signal sources for a run, highest priority first:
//! 1. `--signals FILE`
//! 2. `detection.signals_path` from settings
//! 3. the local machine (only when no signal file is in play)

pub mod calc;
pub mod catalog;
pub mod detect;
pub mod settings;

use std::path::PathBuf;

use crate::cli::args::SignalArgs;
use crate::config::Settings;
use crate::device::{DeviceDetector, HostProbe, KnownDeviceCatalog, SignalFile};

/// Signal files that apply to this run, in priority order
fn signal_files(settings: &Settings, args: &SignalArgs) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(ref path) = args.signals {
        files.push(path.clone());
    }
    if let Some(ref path) = settings.detection.signals_path {
        if !files.contains(path) {
            files.push(path.clone());
        }
    }
    files
}

/// Build a detector from settings and per-command flags.
///
/// A signal file describes some other device, so the host probe is left
/// out whenever one is configured. Mixing the two would blend hardware
/// from different machines into one snapshot.
pub fn build_detector(settings: &Settings, args: &SignalArgs) -> DeviceDetector {
    let files = signal_files(settings, args);
    let probe_host = files.is_empty() && settings.detection.host_probe && !args.no_host;

    let mut detector = DeviceDetector::new();
    for path in files {
        tracing::debug!(path = %path.display(), "using signal file");
        detector = detector.with_source(SignalFile::new(path));
    }
    if probe_host {
        let benchmark = settings.detection.benchmark && !args.no_benchmark;
        detector = detector.with_source(HostProbe::new(benchmark));
    }
    detector
}

/// Built-in catalog, extended by the user's file unless `builtin_only`
pub fn load_catalog(settings: &Settings, builtin_only: bool) -> KnownDeviceCatalog {
    if builtin_only {
        return KnownDeviceCatalog::builtin();
    }
    let path = settings.catalog_path();
    KnownDeviceCatalog::load(Some(&path))
}
