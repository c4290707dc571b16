//! Built-in demo session.
//!
//! A canned command script that exercises the menu, search, notification
//! and scanner paths without a host process attached. Useful for styling
//! work and for trying the overlay out of the box.

use super::{FileSource, InputSource};
use serde_json::json;

/// Create an input source replaying the built-in demo script.
pub fn demo_source() -> InputSource {
    InputSource::File(FileSource::from_lines(demo_script()))
}

/// The demo command script, one JSON envelope per line.
pub fn demo_script() -> Vec<String> {
    let commands = vec![
        json!({
            "action": "showMenu",
            "menu": {
                "id": "root",
                "title": "Dev Tools",
                "subtitle": "demo session",
                "options": [
                    {
                        "id": "ped_decals",
                        "title": "Ped Decals",
                        "description": "Apply decals to the current ped",
                        "icon": "🎨",
                    },
                    {
                        "id": "ped_outfits",
                        "title": "Ped Outfits",
                        "description": "Outfit presets (unavailable in demo)",
                        "icon": "👕",
                        "disabled": true,
                    },
                    {"id": "sep_1", "separator": true},
                    {
                        "id": "clear_effects",
                        "title": "Clear All Effects",
                        "description": "Reset every applied effect",
                        "icon": "🧹",
                        "applied": true,
                    },
                ],
                "searchData": [
                    {
                        "id": "decal_scorch",
                        "title": "Scorch Marks",
                        "description": "Burnt decal set",
                        "category": "ped_decals",
                        "categoryLabel": "Ped Decals",
                        "searchTerms": "burn fire scorch",
                    },
                    {
                        "id": "outfit_mechanic",
                        "title": "Mechanic Outfit",
                        "description": "Overalls and gloves",
                        "category": "ped_outfits",
                        "categoryLabel": "Ped Outfits",
                        "searchTerms": "work clothes overalls",
                    },
                ],
            },
        }),
        json!({
            "action": "showNotification",
            "notification": {
                "title": "Demo Mode",
                "message": "Type to search, Enter selects, Esc closes",
                "type": "info",
                "duration": 8000,
            },
        }),
        json!({"action": "showEntityScanner"}),
        json!({
            "action": "updateEntityInfo",
            "showUI": true,
            "entityInfo": {
                "entity": 1234,
                "hash": -1404136139,
                "hashStr": "0xAC64005D",
                "coords": {"x": 215.76, "y": -810.12, "z": 30.73},
                "rotation": {"x": 0.0, "y": 0.0, "z": 157.5},
                "heading": 157.5,
                "type": "vehicle",
                "networkId": 4242,
            },
        }),
    ];

    commands.into_iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::process_lines;

    #[test]
    fn demo_script_parses_without_errors() {
        let (messages, errors) = process_lines(demo_script(), 1);
        assert!(errors.is_empty(), "Demo script must parse cleanly");
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn demo_source_drains_the_script() {
        let mut source = demo_source();
        assert_eq!(source.poll().unwrap().len(), 4);
        assert!(source.poll().unwrap().is_empty());
        assert!(!source.is_live());
    }
}
