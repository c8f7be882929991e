// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Signal collection
//!
//! Signal sources run concurrently and independently. A source that errors
//! or panics is logged and skipped; the remaining sources still contribute.
//! When nothing usable comes back the detector returns the fallback snapshot.

use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::time::Instant;

use async_trait::async_trait;
use futures::future::join_all;
use futures::FutureExt;
use sysinfo::System;
use tokio::sync::Mutex;

use super::signals::RawSignals;
use super::snapshot::DeviceSnapshot;

const BENCHMARK_ITERATIONS: u32 = 100_000;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// A best-effort provider of raw device signals
#[async_trait]
pub trait SignalSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Gather whatever this source can see
    async fn collect(&self) -> anyhow::Result<RawSignals>;
}

/// Signals supplied up front, e.g. forwarded from a browser
pub struct StaticSignals {
    name: String,
    signals: RawSignals,
}

impl StaticSignals {
    pub fn new(name: impl Into<String>, signals: RawSignals) -> Self {
        Self {
            name: name.into(),
            signals,
        }
    }
}

#[async_trait]
impl SignalSource for StaticSignals {
    fn name(&self) -> &str {
        &self.name
    }

    async fn collect(&self) -> anyhow::Result<RawSignals> {
        Ok(self.signals.clone())
    }
}

/// Signals read from a JSON file when collection runs
pub struct SignalFile {
    path: PathBuf,
}

impl SignalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SignalSource for SignalFile {
    fn name(&self) -> &str {
        "signal-file"
    }

    async fn collect(&self) -> anyhow::Result<RawSignals> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Probes the machine this process runs on
pub struct HostProbe {
    benchmark: bool,
}

impl HostProbe {
    pub fn new(benchmark: bool) -> Self {
        Self { benchmark }
    }

    fn probe_system() -> RawSignals {
        let mut sys = System::new_all();
        sys.refresh_all();

        let ram_bytes = sys.total_memory();
        let ram_gb = (ram_bytes as f64 / BYTES_PER_GB).round();
        let cores = sys.cpus().len() as u32;

        RawSignals {
            platform: Some(format!(
                "{} {}",
                std::env::consts::OS,
                std::env::consts::ARCH
            )),
            os_name: System::name(),
            os_version: System::os_version(),
            device_memory: (ram_gb > 0.0).then_some(ram_gb),
            hardware_concurrency: (cores > 0).then_some(cores),
            touch_events: Some(false),
            max_touch_points: Some(0),
            ..Default::default()
        }
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Time the arithmetic micro-benchmark, in milliseconds
pub fn run_cpu_benchmark() -> f64 {
    let start = Instant::now();
    let mut acc = 0.0_f64;
    for i in 0..BENCHMARK_ITERATIONS {
        let x = i as f64;
        acc += x.sqrt() * x.sin();
    }
    std::hint::black_box(acc);
    start.elapsed().as_secs_f64() * 1000.0
}

#[async_trait]
impl SignalSource for HostProbe {
    fn name(&self) -> &str {
        "host"
    }

    async fn collect(&self) -> anyhow::Result<RawSignals> {
        let benchmark = self.benchmark;
        let signals = tokio::task::spawn_blocking(move || {
            let mut signals = HostProbe::probe_system();
            if benchmark {
                signals.js_benchmark_ms = Some(run_cpu_benchmark());
            }
            signals
        })
        .await?;
        Ok(signals)
    }
}

/// Runs signal sources and normalizes their merged output.
///
/// Overlapping `detect` calls do not collect twice: a caller that finds a
/// detection in flight waits for it and receives the same snapshot.
pub struct DeviceDetector {
    sources: Vec<Box<dyn SignalSource>>,
    state: Mutex<Option<DeviceSnapshot>>,
}

impl DeviceDetector {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            state: Mutex::new(None),
        }
    }

    /// Add a source. Earlier sources win when two report the same field.
    pub fn with_source(mut self, source: impl SignalSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Detect the device, or join a detection already in progress
    pub async fn detect(&self) -> DeviceSnapshot {
        if let Ok(mut guard) = self.state.try_lock() {
            let snapshot = self.collect().await;
            *guard = Some(snapshot.clone());
            return snapshot;
        }

        tracing::debug!("detection in progress, waiting for its result");
        let mut guard = self.state.lock().await;
        match guard.as_ref() {
            Some(snapshot) => snapshot.clone(),
            // The in-flight detection was cancelled before finishing
            None => {
                let snapshot = self.collect().await;
                *guard = Some(snapshot.clone());
                snapshot
            }
        }
    }

    /// Most recent completed snapshot, if any
    pub async fn last_snapshot(&self) -> Option<DeviceSnapshot> {
        self.state.lock().await.clone()
    }

    async fn collect(&self) -> DeviceSnapshot {
        let results = join_all(self.sources.iter().map(|source| async move {
            let outcome = AssertUnwindSafe(source.collect()).catch_unwind().await;
            (source.name(), outcome)
        }))
        .await;

        let mut merged = RawSignals::default();
        for (name, outcome) in results {
            match outcome {
                Ok(Ok(signals)) => {
                    tracing::debug!(source = name, "signal source finished");
                    merged.merge(signals);
                }
                Ok(Err(e)) => {
                    tracing::warn!(source = name, "signal source failed: {:#}", e);
                }
                Err(_) => {
                    tracing::warn!(source = name, "signal source panicked");
                }
            }
        }

        if merged.is_empty() {
            tracing::warn!("no device signals available, using fallback snapshot");
            return DeviceSnapshot::fallback();
        }

        let snapshot = DeviceSnapshot::from_signals(&merged);
        tracing::info!(
            device = %snapshot.device_name,
            device_type = %snapshot.device_type,
            accuracy = snapshot.detection_accuracy,
            "device detection complete"
        );
        snapshot
    }
}

impl Default for DeviceDetector {
    fn default() -> Self {
        Self::new()
    }
}
