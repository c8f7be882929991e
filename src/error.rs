// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Sensitune
//!
//! The scoring pipeline never fails: missing signals degrade to defaults and
//! lookup misses degrade to fallback profiles. These errors only surface from
//! the edges (settings, catalog files, signal files, CLI).

use thiserror::Error;

/// Main error type for Sensitune operations
#[derive(Error, Debug)]
pub enum SensituneError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Known-device catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A signal source failed
    #[error("Signal error: {0}")]
    Signal(String),
}

/// Result type alias for Sensitune operations
pub type Result<T> = std::result::Result<T, SensituneError>;

impl From<toml::de::Error> for SensituneError {
    fn from(err: toml::de::Error) -> Self {
        SensituneError::Toml(err.to_string())
    }
}

impl From<anyhow::Error> for SensituneError {
    fn from(err: anyhow::Error) -> Self {
        SensituneError::Signal(err.to_string())
    }
}
