// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Raw host signals
//!
//! `RawSignals` mirrors what a browser (or any host) can report. Every field is
//! optional; normalization into a `DeviceSnapshot` supplies the defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Network Information API fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSignals {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub effective_type: Option<String>,
    /// Mbps
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub downlink: Option<f64>,
    /// Milliseconds
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rtt: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
}

/// Best-effort signals gathered from the host environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignals {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Overrides user-agent OS detection when the host knows better
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    /// `navigator.deviceMemory`, GB
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub device_memory: Option<f64>,
    /// `navigator.hardwareConcurrency`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gpu_vendor: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gpu_renderer: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub webgl_supported: Option<bool>,
    /// Whether a battery API answered
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub battery_available: Option<bool>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub viewport_height: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub device_pixel_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<u32>,
    /// e.g. `portrait-primary`
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub orientation_type: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionSignals>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_touch_points: Option<u32>,
    /// `ontouchstart` present
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub touch_events: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pointer_events: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub force_touch: Option<bool>,

    /// Wall time of the arithmetic micro-benchmark, ms
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub js_benchmark_ms: Option<f64>,
    /// Wall time of the WebGL clear benchmark, ms
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub webgl_benchmark_ms: Option<f64>,
}

/// Read one field, dropping a value of the wrong shape instead of failing the record
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!("Ignoring malformed signal value {}: {}", value, e);
            Ok(None)
        }
    }
}

macro_rules! fill_gaps {
    ($self:ident, $other:ident, $($field:ident),+ $(,)?) => {
        $(
            if $self.$field.is_none() {
                $self.$field = $other.$field;
            }
        )+
    };
}

impl RawSignals {
    /// Fill every field still unset from `other`. Fields already present win.
    pub fn merge(&mut self, other: RawSignals) {
        fill_gaps!(
            self,
            other,
            user_agent,
            platform,
            os_name,
            os_version,
            device_memory,
            hardware_concurrency,
            gpu_vendor,
            gpu_renderer,
            webgl_supported,
            battery_available,
            screen_width,
            screen_height,
            viewport_width,
            viewport_height,
            device_pixel_ratio,
            color_depth,
            orientation_type,
            connection,
            max_touch_points,
            touch_events,
            pointer_events,
            force_touch,
            js_benchmark_ms,
            webgl_benchmark_ms,
        );
    }

    /// True when no source reported anything
    pub fn is_empty(&self) -> bool {
        *self == RawSignals::default()
    }
}
