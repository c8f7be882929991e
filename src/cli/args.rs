// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Sensitune.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::device::DeviceType;
use crate::sensitivity::SensitivityMode;

/// Sensitune - device-aware sensitivity recommendations
#[derive(Parser, Debug)]
#[command(name = "sensitune")]
#[command(version, about = "Device-aware sensitivity recommendations for touch shooters")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.sensitune/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the device and show the normalized snapshot
    Detect(DetectArgs),

    /// Calculate recommended sensitivity values
    #[command(alias = "sens")]
    Calc(CalcArgs),

    /// List the known-device catalog
    Catalog(CatalogArgs),

    /// Show or edit settings
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Where device signals come from
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SignalArgs {
    /// JSON file with browser-reported signals
    #[arg(short, long)]
    pub signals: Option<PathBuf>,

    /// Do not probe the local machine
    #[arg(long)]
    pub no_host: bool,

    /// Skip the CPU micro-benchmark
    #[arg(long)]
    pub no_benchmark: bool,
}

/// Arguments for the detect subcommand
#[derive(clap::Args, Debug, Default)]
pub struct DetectArgs {
    #[command(flatten)]
    pub signals: SignalArgs,

    /// Show every snapshot field instead of the summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the calc subcommand
#[derive(clap::Args, Debug, Default)]
pub struct CalcArgs {
    #[command(flatten)]
    pub signals: SignalArgs,

    /// Fingers used for control input (clamped to 2-6)
    #[arg(short, long, allow_negative_numbers = true)]
    pub fingers: Option<i64>,

    /// Sensitivity screen (game or shoot)
    #[arg(short, long)]
    pub mode: Option<SensitivityMode>,

    /// Override the detected device type
    #[arg(short = 't', long)]
    pub device_type: Option<DeviceType>,

    /// Print only the `label: value` lines
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the catalog subcommand
#[derive(clap::Args, Debug, Default)]
pub struct CatalogArgs {
    /// Only list one device type
    #[arg(short = 't', long)]
    pub device_type: Option<DeviceType>,

    /// Only the built-in entries, ignoring the user catalog file
    #[arg(long)]
    pub builtin: bool,
}

/// Arguments for settings/config
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "defaults.finger_count")
        key: String,

        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Reset configuration to defaults
    Reset,

    /// Print the settings file location
    Path,
}

/// Output format for responses
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== CLI Global Arguments ====================

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sensitune", "detect"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_verbose_multiple() {
        let cli = Cli::parse_from(["sensitune", "-vvv", "detect"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "sensitune",
            "calc",
            "--format",
            "json",
            "--config",
            "/tmp/s.json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.json")));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["sensitune"]).is_err());
    }

    // ==================== Detect Command ====================

    #[test]
    fn test_detect_signal_flags() {
        let cli = Cli::parse_from([
            "sensitune",
            "detect",
            "--signals",
            "phone.json",
            "--no-host",
            "--detailed",
        ]);
        match cli.command {
            Commands::Detect(args) => {
                assert_eq!(args.signals.signals, Some(PathBuf::from("phone.json")));
                assert!(args.signals.no_host);
                assert!(!args.signals.no_benchmark);
                assert!(args.detailed);
            }
            other => panic!("expected detect, got {:?}", other),
        }
    }

    // ==================== Calc Command ====================

    #[test]
    fn test_calc_all_flags() {
        let cli = Cli::parse_from([
            "sensitune",
            "calc",
            "--fingers",
            "5",
            "--mode",
            "shoot",
            "--device-type",
            "tablet",
            "--plain",
        ]);
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.fingers, Some(5));
                assert_eq!(args.mode, Some(SensitivityMode::Shoot));
                assert_eq!(args.device_type, Some(DeviceType::Tablet));
                assert!(args.plain);
            }
            other => panic!("expected calc, got {:?}", other),
        }
    }

    #[test]
    fn test_calc_accepts_out_of_range_fingers() {
        let cli = Cli::parse_from(["sensitune", "calc", "-f", "-1"]);
        match cli.command {
            Commands::Calc(args) => assert_eq!(args.fingers, Some(-1)),
            other => panic!("expected calc, got {:?}", other),
        }
    }

    #[test]
    fn test_calc_alias() {
        let cli = Cli::parse_from(["sensitune", "sens"]);
        assert!(matches!(cli.command, Commands::Calc(_)));
    }

    #[test]
    fn test_calc_rejects_bad_mode() {
        assert!(Cli::try_parse_from(["sensitune", "calc", "--mode", "aim"]).is_err());
        assert!(Cli::try_parse_from(["sensitune", "calc", "-t", "watch"]).is_err());
    }

    // ==================== Catalog / Settings ====================

    #[test]
    fn test_catalog_filter() {
        let cli = Cli::parse_from(["sensitune", "catalog", "-t", "mobile", "--builtin"]);
        match cli.command {
            Commands::Catalog(args) => {
                assert_eq!(args.device_type, Some(DeviceType::Mobile));
                assert!(args.builtin);
            }
            other => panic!("expected catalog, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_subcommands() {
        let cli = Cli::parse_from(["sensitune", "config", "set", "defaults.mode", "shoot"]);
        match cli.command {
            Commands::Settings(SettingsArgs {
                command: Some(SettingsCommands::Set { key, value }),
            }) => {
                assert_eq!(key, "defaults.mode");
                assert_eq!(value, "shoot");
            }
            other => panic!("expected settings set, got {:?}", other),
        }

        let cli = Cli::parse_from(["sensitune", "settings"]);
        assert!(matches!(
            cli.command,
            Commands::Settings(SettingsArgs { command: None })
        ));

        let cli = Cli::parse_from(["sensitune", "settings", "path"]);
        assert!(matches!(
            cli.command,
            Commands::Settings(SettingsArgs {
                command: Some(SettingsCommands::Path)
            })
        ));
    }
}
