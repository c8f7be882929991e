// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

/// Normalize the settings layout before deserializing.
///
/// Flat files with `finger_count`/`mode` at the top level are moved under
/// `defaults`. Keys already present under `defaults` win.
pub(super) fn migrate_on_load(value: Value) -> Value {
    let mut map = match value {
        Value::Object(map) => map,
        other => return other,
    };

    let mut legacy = serde_json::Map::new();
    for key in ["finger_count", "mode"] {
        if let Some(old) = map.remove(key) {
            legacy.insert(key.to_string(), old);
        }
    }

    if !legacy.is_empty() {
        let defaults = map
            .remove("defaults")
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        map.insert(
            "defaults".to_string(),
            deep_merge(Value::Object(legacy), defaults),
        );
    }

    Value::Object(map)
}

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_migrate_moves_top_level_keys() {
        let migrated = migrate_on_load(json!({ "finger_count": 5, "mode": "shoot" }));
        assert_eq!(migrated, json!({ "defaults": { "finger_count": 5, "mode": "shoot" } }));
    }

    #[test]
    fn test_migrate_keeps_existing_defaults() {
        let migrated = migrate_on_load(json!({
            "finger_count": 5,
            "defaults": { "finger_count": 3 }
        }));
        assert_eq!(migrated["defaults"]["finger_count"], 3);
    }

    #[test]
    fn test_migrate_current_layout_untouched() {
        let current = json!({ "defaults": { "finger_count": 4 }, "detection": {} });
        assert_eq!(migrate_on_load(current.clone()), current);
        assert_eq!(migrate_on_load(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_deep_merge_overlay_wins() {
        let merged = deep_merge(
            json!({ "a": { "x": 1, "y": 2 }, "b": true }),
            json!({ "a": { "x": 9 } }),
        );
        assert_eq!(merged, json!({ "a": { "x": 9, "y": 2 }, "b": true }));
    }
}
