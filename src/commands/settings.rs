// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings command

use std::path::Path;

use crate::cli::args::{OutputFormat, SettingsArgs, SettingsCommands};
use crate::config::{Settings, SETTING_KEYS};
use crate::error::Result;

/// Execute the settings command against the file at `path`
pub fn execute(
    args: SettingsArgs,
    mut settings: Settings,
    path: &Path,
    format: &OutputFormat,
) -> Result<()> {
    match args.command.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => {
            if matches!(format, OutputFormat::Json) {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print!("{}", render_text(&settings)?);
            }
        }
        SettingsCommands::Get { key } => {
            println!("{}", settings.get(&key)?);
        }
        SettingsCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save_to(path)?;
            println!("Setting '{}' updated to {}.", key, settings.get(&key)?);
        }
        SettingsCommands::Reset => {
            Settings::default().save_to_clean(path)?;
            println!("Settings reset to defaults.");
        }
        SettingsCommands::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn render_text(settings: &Settings) -> Result<String> {
    let width = SETTING_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for key in SETTING_KEYS {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            key,
            settings.get(key)?,
            width = width
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings_args(command: SettingsCommands) -> SettingsArgs {
        SettingsArgs {
            command: Some(command),
        }
    }

    #[test]
    fn test_render_text_lists_every_key() {
        let text = render_text(&Settings::default()).unwrap();
        for key in SETTING_KEYS {
            assert!(text.contains(key), "missing {}", key);
        }
        assert!(text.contains("auto"));
    }

    #[test]
    fn test_set_persists_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        execute(
            settings_args(SettingsCommands::Set {
                key: "defaults.finger_count".to_string(),
                value: "5".to_string(),
            }),
            Settings::default(),
            &path,
            &OutputFormat::Text,
        )
        .unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.finger_count, 5);
    }

    #[test]
    fn test_set_invalid_value_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let result = execute(
            settings_args(SettingsCommands::Set {
                key: "defaults.mode".to_string(),
                value: "sprint".to_string(),
            }),
            Settings::default(),
            &path,
            &OutputFormat::Text,
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_clearing_override_survives_merge() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.defaults.device_type = Some(crate::device::DeviceType::Tablet);
        settings.save_to(&path).unwrap();

        execute(
            settings_args(SettingsCommands::Set {
                key: "defaults.device_type".to_string(),
                value: "auto".to_string(),
            }),
            Settings::load_from(&path).unwrap(),
            &path,
            &OutputFormat::Text,
        )
        .unwrap();

        assert!(Settings::load_from(&path)
            .unwrap()
            .defaults
            .device_type
            .is_none());
    }

    #[test]
    fn test_reset_overwrites_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "defaults": { "finger_count": 6 }, "extra": 1 }"#).unwrap();

        execute(
            settings_args(SettingsCommands::Reset),
            Settings::load_from(&path).unwrap(),
            &path,
            &OutputFormat::Text,
        )
        .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.get("extra").is_none());
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_get_unknown_key_errors() {
        let temp_dir = TempDir::new().unwrap();
        let result = execute(
            settings_args(SettingsCommands::Get {
                key: "nope".to_string(),
            }),
            Settings::default(),
            &temp_dir.path().join("settings.json"),
            &OutputFormat::Text,
        );
        assert!(result.is_err());
    }
}
