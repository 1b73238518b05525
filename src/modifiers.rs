//! Modifier flag bit sets and the codec between the two flag encodings.
//!
//! Shortcuts deal with exactly four semantic modifiers: Command, Option,
//! Shift and Control. The native (AppKit/CGEvent) encoding puts them in the
//! high bits (1 << 17 ...); the legacy Carbon encoding used by the system
//! hot-key registrar puts them in the low bits (1 << 8 ...). The two must
//! never be mixed without going through this codec.

use bitflags::bitflags;

use crate::input_source::LayoutDirection;

// Legacy Carbon modifier bits (cmdKey and friends)
const CARBON_CMD: u32 = 1 << 8;
const CARBON_SHIFT: u32 = 1 << 9;
const CARBON_OPTION: u32 = 1 << 11;
const CARBON_CONTROL: u32 = 1 << 12;

bitflags! {
    /// Set of the four shortcut modifiers in the native bit encoding.
    ///
    /// Bit values match `NSEventModifierFlags` / `CGEventFlags` so raw event
    /// flags can be masked directly via [`ModifierFlags::from_bits_masked`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u64 {
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const OPTION = 1 << 19;
        const COMMAND = 1 << 20;
    }
}

/// The canonical macOS display order: Control, Option, Shift, Command.
pub const CANONICAL_ORDER: [ModifierFlags; 4] = [
    ModifierFlags::CONTROL,
    ModifierFlags::OPTION,
    ModifierFlags::SHIFT,
    ModifierFlags::COMMAND,
];

impl ModifierFlags {
    /// Masks a raw native flag word down to the four semantic modifier bits.
    ///
    /// Raw key events carry extra bits (caps lock, fn, device-dependent
    /// bits); those are dropped, never stored.
    pub fn from_bits_masked(raw: u64) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Converts to the legacy Carbon bit encoding.
    pub fn to_carbon(self) -> u32 {
        let mut carbon = 0;

        if self.contains(Self::COMMAND) {
            carbon |= CARBON_CMD;
        }
        if self.contains(Self::OPTION) {
            carbon |= CARBON_OPTION;
        }
        if self.contains(Self::CONTROL) {
            carbon |= CARBON_CONTROL;
        }
        if self.contains(Self::SHIFT) {
            carbon |= CARBON_SHIFT;
        }

        carbon
    }

    /// Converts from the legacy Carbon bit encoding. Unrecognized bits are
    /// dropped, not errored.
    pub fn from_carbon(carbon: u32) -> Self {
        let mut flags = Self::empty();

        if carbon & CARBON_CMD != 0 {
            flags |= Self::COMMAND;
        }
        if carbon & CARBON_OPTION != 0 {
            flags |= Self::OPTION;
        }
        if carbon & CARBON_CONTROL != 0 {
            flags |= Self::CONTROL;
        }
        if carbon & CARBON_SHIFT != 0 {
            flags |= Self::SHIFT;
        }

        flags
    }

    /// Unicode glyph for a single modifier (⌘, ⌥, ⇧, ⌃).
    ///
    /// Returns None when `self` is not exactly one modifier.
    pub fn glyph(self) -> Option<char> {
        match self {
            Self::COMMAND => Some('\u{2318}'), // ⌘
            Self::OPTION => Some('\u{2325}'),  // ⌥
            Self::SHIFT => Some('\u{21E7}'),   // ⇧
            Self::CONTROL => Some('\u{2303}'), // ⌃
            _ => None,
        }
    }

    /// Readable name for a single modifier.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::COMMAND => Some("Command"),
            Self::OPTION => Some("Option"),
            Self::SHIFT => Some("Shift"),
            Self::CONTROL => Some("Control"),
            _ => None,
        }
    }

    /// Modifier glyphs in canonical order, e.g. "⇧⌘". Reversed for
    /// right-to-left layout direction.
    pub fn symbolic_prefix(self, direction: LayoutDirection) -> String {
        let mut glyphs: Vec<char> = CANONICAL_ORDER
            .iter()
            .filter(|flag| self.contains(**flag))
            .filter_map(|flag| flag.glyph())
            .collect();

        if direction == LayoutDirection::RightToLeft {
            glyphs.reverse();
        }

        glyphs.into_iter().collect()
    }

    /// Modifier names in canonical order joined with "-", with a trailing
    /// "-" when non-empty, e.g. "Shift-Command-".
    pub fn literal_prefix(self, direction: LayoutDirection) -> String {
        let mut names: Vec<&str> = CANONICAL_ORDER
            .iter()
            .filter(|flag| self.contains(**flag))
            .filter_map(|flag| flag.name())
            .collect();

        if direction == LayoutDirection::RightToLeft {
            names.reverse();
        }

        if names.is_empty() {
            String::new()
        } else {
            format!("{}-", names.join("-"))
        }
    }

    /// Parses one leading modifier glyph off `s`, returning the flag and the
    /// remainder. Used by the key-equivalent parser.
    pub(crate) fn strip_glyph(s: &str) -> Option<(Self, &str)> {
        let c = s.chars().next()?;
        let flag = match c {
            '\u{2318}' => Self::COMMAND,
            '\u{2325}' => Self::OPTION,
            '\u{21E7}' => Self::SHIFT,
            '\u{2303}' => Self::CONTROL,
            _ => return None,
        };
        Some((flag, &s[c.len_utf8()..]))
    }
}

/// Serialize/deserialize [`ModifierFlags`] as their raw native bit word, the
/// encoding used by the dictionary representation.
pub mod flag_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ModifierFlags;

    pub fn serialize<S: Serializer>(flags: &ModifierFlags, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(flags.bits())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ModifierFlags, D::Error> {
        u64::deserialize(deserializer).map(ModifierFlags::from_bits_masked)
    }
}
