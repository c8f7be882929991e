// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Known-device catalog listing

use serde::Serialize;

use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::config::Settings;
use crate::device::{DeviceType, KnownDevice, KnownDeviceCatalog};
use crate::error::Result;

use super::load_catalog;

const LISTED_TYPES: [DeviceType; 3] = [DeviceType::Mobile, DeviceType::Tablet, DeviceType::Desktop];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogSection<'a> {
    device_type: DeviceType,
    devices: &'a [KnownDevice],
}

fn sections(catalog: &KnownDeviceCatalog, filter: Option<DeviceType>) -> Vec<CatalogSection<'_>> {
    LISTED_TYPES
        .into_iter()
        .filter(|t| filter.map_or(true, |f| f == *t))
        .map(|device_type| CatalogSection {
            device_type,
            devices: catalog.devices(device_type),
        })
        .collect()
}

/// Execute the catalog command
pub fn execute(args: &CatalogArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let catalog = load_catalog(settings, args.builtin);
    let sections = sections(&catalog, args.device_type);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    print!("{}", render_text(&sections));
    Ok(())
}

fn render_text(sections: &[CatalogSection<'_>]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!(
            "\n=== {} ({} devices) ===\n\n",
            section.device_type,
            section.devices.len()
        ));

        if section.devices.is_empty() {
            out.push_str("  (none)\n");
            continue;
        }

        let width = section
            .devices
            .iter()
            .map(|d| d.name.chars().count())
            .max()
            .unwrap_or(0);
        for device in section.devices {
            out.push_str(&format!(
                "  {:<width$}  {:<6}  gpu {:<8}  screen {}",
                device.name,
                device.tier.to_string(),
                device.gpu.to_string(),
                device.screen,
                width = width
            ));
            if !device.aliases.is_empty() {
                out.push_str(&format!("  (aka {})", device.aliases.join(", ")));
            }
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_unfiltered() {
        let catalog = KnownDeviceCatalog::builtin();
        let all = sections(&catalog, None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].device_type, DeviceType::Mobile);
        let total: usize = all.iter().map(|s| s.devices.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_sections_filtered() {
        let catalog = KnownDeviceCatalog::builtin();
        let tablets = sections(&catalog, Some(DeviceType::Tablet));
        assert_eq!(tablets.len(), 1);
        assert_eq!(tablets[0].device_type, DeviceType::Tablet);

        assert!(sections(&catalog, Some(DeviceType::Unknown)).is_empty());
    }

    #[test]
    fn test_sections_json_shape() {
        let catalog = KnownDeviceCatalog::builtin();
        let json = serde_json::to_string(&sections(&catalog, Some(DeviceType::Desktop))).unwrap();
        assert!(json.contains("\"deviceType\":\"desktop\""));
        assert!(json.contains("\"name\":\"Mac\""));
    }

    #[test]
    fn test_render_text_lists_aliases() {
        let catalog = KnownDeviceCatalog::builtin();
        let text = render_text(&sections(&catalog, Some(DeviceType::Mobile)));
        assert!(text.contains("=== mobile ("));
        assert!(text.contains("Galaxy S24 Ultra"));
        assert!(text.contains("SM-S928B"));
    }

    #[test]
    fn test_render_text_empty_section() {
        let catalog = KnownDeviceCatalog::empty();
        let text = render_text(&sections(&catalog, Some(DeviceType::Tablet)));
        assert!(text.contains("=== tablet (0 devices) ==="));
        assert!(text.contains("(none)"));
    }
}
