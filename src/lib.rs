//! Keyboard shortcut recording primitives.
//!
//! The crate models a recorded shortcut as a key code plus modifier flags,
//! translates key codes into symbolic ("⌘A") or literal ("Command-A")
//! display strings through pluggable input sources, and validates freshly
//! recorded shortcuts against delegate rules, system-reserved combinations
//! and an application menu snapshot.
//!
//! ```
//! use shortcut_kit::{ModifierFlags, Shortcut, ShortcutValidator, keycodes};
//!
//! let shortcut = Shortcut::new(keycodes::KEY_S, ModifierFlags::COMMAND, None, None);
//! assert_eq!(shortcut.to_string(), "⌘S");
//! assert!(ShortcutValidator::new().validate(&shortcut, &[]).is_ok());
//! ```

mod error;
mod input_source;
pub mod keycodes;
mod menu;
mod modifiers;
mod shortcut;
mod transformer;
mod validator;

pub use error::Error;
pub use input_source::{AsciiInputSource, InputSource, LayoutDirection};
pub use menu::{MenuItem, MenuScan, flatten, scan};
pub use modifiers::{CANONICAL_ORDER, ModifierFlags};
pub use shortcut::{
    KEY_CHARACTERS, KEY_CHARACTERS_IGNORING_MODIFIERS, KEY_KEY_CODE, KEY_MODIFIER_FLAGS, KeyEvent,
    Shortcut,
};
pub use transformer::KeyCodeTransformer;
pub use validator::{
    Conflict, ConflictSource, ReservedShortcut, ShortcutValidator, SystemShortcutSource,
    ValidatorDelegate,
};
