//! End-to-end exercises: record, persist, render and validate.

use std::sync::Arc;

use serde_json::json;
use shortcut_kit::{
    Conflict, ConflictSource, KeyEvent, MenuItem, ModifierFlags, ReservedShortcut, Shortcut,
    ShortcutValidator, SystemShortcutSource, ValidatorDelegate, keycodes,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn application_menu() -> Vec<MenuItem> {
    MenuItem::from_json(
        r#"[
            {
                "title": "File",
                "children": [
                    { "title": "New", "keyEquivalent": "n", "keyEquivalentModifierMask": 1048576 },
                    { "title": "Save", "keyEquivalent": "s", "keyEquivalentModifierMask": 1048576 },
                    { "title": "Save As…", "keyEquivalent": "S", "keyEquivalentModifierMask": 1048576 }
                ]
            },
            {
                "title": "Edit",
                "children": [
                    { "title": "Special Characters", "keyEquivalent": "å", "keyEquivalentModifierMask": 1048576 }
                ]
            }
        ]"#,
    )
    .expect("menu snapshot parses")
}

struct Screenshots;

impl SystemShortcutSource for Screenshots {
    fn all_reserved_shortcuts(&self) -> Vec<ReservedShortcut> {
        vec![ReservedShortcut {
            shortcut: Shortcut::new(
                keycodes::KEY_3,
                ModifierFlags::SHIFT | ModifierFlags::COMMAND,
                None,
                None,
            ),
            description: "Save picture of screen as a file".to_string(),
        }]
    }
}

#[test]
fn recorded_event_conflicts_with_menu_item() {
    init_logging();

    let event = KeyEvent {
        key_code: keycodes::KEY_S,
        modifier_flags: ModifierFlags::COMMAND.bits() | (1 << 16), // caps lock on
        characters: Some("s".to_string()),
        characters_ignoring_modifiers: Some("s".to_string()),
    };
    let shortcut = Shortcut::from_key_event(&event);
    assert_eq!(shortcut.modifier_flags(), ModifierFlags::COMMAND);

    let conflict: Conflict = ShortcutValidator::new()
        .with_system_shortcuts(Arc::new(Screenshots))
        .validate(&shortcut, &application_menu())
        .unwrap_err();

    assert_eq!(conflict.source, ConflictSource::MenuItem);
    assert!(conflict.reason.contains("File → Save"), "{}", conflict.reason);
    // the uppercase key equivalent means Shift, so plain ⌘S must not hit it
    assert!(!conflict.reason.contains("Save As"), "{}", conflict.reason);
}

#[test]
fn shifted_key_equivalent_matches_the_shifted_shortcut() {
    init_logging();

    let shift_cmd_s = Shortcut::new(
        keycodes::KEY_S,
        ModifierFlags::SHIFT | ModifierFlags::COMMAND,
        None,
        None,
    );
    let conflict = ShortcutValidator::new()
        .validate(&shift_cmd_s, &application_menu())
        .unwrap_err();
    assert!(conflict.reason.contains("Save As"), "{}", conflict.reason);
}

#[test]
fn layout_alternate_in_menu_matches_option_shortcut() {
    init_logging();

    // "å" with a Command mask is how Cocoa spells Option-Command-A
    let option_cmd_a = Shortcut::new(
        keycodes::KEY_A,
        ModifierFlags::OPTION | ModifierFlags::COMMAND,
        None,
        None,
    );
    let conflict = ShortcutValidator::new()
        .validate(&option_cmd_a, &application_menu())
        .unwrap_err();
    assert_eq!(conflict.source, ConflictSource::MenuItem);
    assert!(
        conflict.reason.contains("Special Characters"),
        "{}",
        conflict.reason
    );
}

#[test]
fn system_reservation_beats_menu_scan() {
    init_logging();

    struct NoMenuCheck;
    impl ValidatorDelegate for NoMenuCheck {
        fn should_check_menu(&self) -> bool {
            false
        }
    }

    let screenshot = Shortcut::new(
        keycodes::KEY_3,
        ModifierFlags::SHIFT | ModifierFlags::COMMAND,
        None,
        None,
    );
    let validator = ShortcutValidator::new()
        .with_delegate(Arc::new(NoMenuCheck))
        .with_system_shortcuts(Arc::new(Screenshots));

    let conflict = validator.validate(&screenshot, &application_menu()).unwrap_err();
    assert_eq!(conflict.source, ConflictSource::SystemShortcut);
    assert!(conflict.reason.contains("⇧⌘3"), "{}", conflict.reason);
}

#[test]
fn dictionary_persistence_survives_validation_flow() {
    init_logging();

    let recorded = Shortcut::new(keycodes::KEY_N, ModifierFlags::COMMAND, None, None);
    let stored = recorded.to_dictionary();
    assert_eq!(stored.get("keyCode"), Some(&json!(keycodes::KEY_N)));

    let restored = Shortcut::from_dictionary(&stored).expect("round trip");
    assert_eq!(restored, recorded);
    assert!(recorded.is_equal_to_dictionary(&stored));

    let conflict = ShortcutValidator::new()
        .validate(&restored, &application_menu())
        .unwrap_err();
    assert!(conflict.reason.contains("File → New"), "{}", conflict.reason);
}

#[test]
fn non_conflicting_shortcut_passes_all_checks() {
    init_logging();

    let free = Shortcut::new(
        keycodes::KEY_F5,
        ModifierFlags::CONTROL | ModifierFlags::COMMAND,
        None,
        None,
    );
    let result = ShortcutValidator::new()
        .with_system_shortcuts(Arc::new(Screenshots))
        .validate(&free, &application_menu());
    assert!(result.is_ok());
    assert_eq!(free.literal_description().as_deref(), Some("Control-Command-F5"));
}
