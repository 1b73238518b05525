//! Menu tree snapshots for key-equivalent conflict checks.
//!
//! A [`MenuItem`] mirrors what hosts extract from the running application's
//! main menu: a title, a Cocoa key equivalent with its modifier mask and any
//! submenu items. The validator walks the tree depth first, so conflicts
//! report the first match in visual order ("File → Save" before
//! "Edit → Find").

use serde::{Deserialize, Serialize};

use crate::modifiers::ModifierFlags;

/// One item of a menu snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    #[serde(rename = "keyEquivalent", default)]
    pub key_equivalent: String,
    #[serde(rename = "keyEquivalentModifierMask", default)]
    pub key_equivalent_modifier_mask: u64,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Parses a menu snapshot from its JSON form, a top-level array of items.
    pub fn from_json(json: &str) -> Result<Vec<MenuItem>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The item's modifier mask reduced to the four shortcut modifiers.
    pub fn modifier_flags(&self) -> ModifierFlags {
        ModifierFlags::from_bits_masked(self.key_equivalent_modifier_mask)
    }

    /// Whether the item carries a key equivalent at all. Items without one
    /// (separators, plain submenu headers) are skipped by the conflict scan.
    pub fn has_key_equivalent(&self) -> bool {
        !self.key_equivalent.is_empty()
    }
}

/// Depth-first pre-order scan over a menu tree, yielding each item together
/// with its title path ("File → Save").
pub fn scan<'a>(menus: &'a [MenuItem]) -> MenuScan<'a> {
    let mut stack = Vec::with_capacity(menus.len());
    for item in menus.iter().rev() {
        stack.push((item, Vec::new()));
    }
    MenuScan { stack }
}

/// Flattens a menu tree into (item, path) pairs in visual order.
pub fn flatten<'a>(menus: &'a [MenuItem]) -> Vec<(&'a MenuItem, String)> {
    scan(menus).collect()
}

pub struct MenuScan<'a> {
    stack: Vec<(&'a MenuItem, Vec<&'a str>)>,
}

impl<'a> Iterator for MenuScan<'a> {
    type Item = (&'a MenuItem, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (item, parents) = self.stack.pop()?;

        let mut path = parents.clone();
        path.push(&item.title);

        for child in item.children.iter().rev() {
            self.stack.push((child, path.clone()));
        }

        Some((item, path.join(" → ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<MenuItem> {
        MenuItem::from_json(
            r#"[
                {
                    "title": "File",
                    "children": [
                        { "title": "New", "keyEquivalent": "n", "keyEquivalentModifierMask": 1048576 },
                        { "title": "Save", "keyEquivalent": "s", "keyEquivalentModifierMask": 1048576 },
                        {
                            "title": "Export",
                            "children": [
                                { "title": "Export as PDF…", "keyEquivalent": "e", "keyEquivalentModifierMask": 1179648 }
                            ]
                        }
                    ]
                },
                {
                    "title": "Edit",
                    "children": [
                        { "title": "Undo", "keyEquivalent": "z", "keyEquivalentModifierMask": 1048576 }
                    ]
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn json_defaults_for_missing_fields() {
        let menus = MenuItem::from_json(r#"[{ "title": "Window" }]"#).unwrap();
        assert_eq!(menus[0].title, "Window");
        assert!(!menus[0].has_key_equivalent());
        assert!(menus[0].children.is_empty());
        assert_eq!(menus[0].modifier_flags(), ModifierFlags::empty());
    }

    #[test]
    fn modifier_mask_is_reduced_to_shortcut_bits() {
        let menus = sample_menu();
        let export = &menus[0].children[2].children[0];
        assert_eq!(
            export.modifier_flags(),
            ModifierFlags::SHIFT | ModifierFlags::COMMAND
        );
    }

    #[test]
    fn scan_visits_in_visual_order_with_paths() {
        let menus = sample_menu();
        let paths: Vec<String> = scan(&menus).map(|(_, path)| path).collect();
        assert_eq!(
            paths,
            vec![
                "File",
                "File → New",
                "File → Save",
                "File → Export",
                "File → Export → Export as PDF…",
                "Edit",
                "Edit → Undo",
            ]
        );
    }

    #[test]
    fn flatten_matches_scan() {
        let menus = sample_menu();
        let flat = flatten(&menus);
        assert_eq!(flat.len(), 7);
        assert_eq!(flat[2].0.title, "Save");
        assert_eq!(flat[2].1, "File → Save");
    }
}
