//! Key code to display string translation.
//!
//! A transformer is a stateless `(is_literal, source)` pair: symbolic
//! transformers produce unicode glyphs (⌘A, ⇤), literal transformers produce
//! words suitable for logging and accessibility ("Command-A", "Shift-Tab").
//! ASCII-capable transformers translate against the fixed US layout and are
//! the only variants that support the reverse (string to key code) lookup;
//! the others translate against whatever [`InputSource`] the host supplies.

use std::sync::Arc;

use crate::error::Error;
use crate::input_source::{self, AsciiInputSource, InputSource, LayoutDirection};
use crate::keycodes::{self, KEY_NONE};
use crate::modifiers::ModifierFlags;

enum Source {
    Ascii(AsciiInputSource),
    Layout(Arc<dyn InputSource>),
}

/// Translates key codes into symbolic or literal display strings.
///
/// Instances hold no mutable state and are safe to share; hosts typically
/// construct the four variants once and pass them around by reference.
pub struct KeyCodeTransformer {
    is_literal: bool,
    source: Source,
}

impl KeyCodeTransformer {
    /// Symbolic transformer over the fixed ASCII-capable layout.
    pub fn symbolic_ascii() -> Self {
        Self {
            is_literal: false,
            source: Source::Ascii(AsciiInputSource),
        }
    }

    /// Literal transformer over the fixed ASCII-capable layout.
    pub fn literal_ascii() -> Self {
        Self {
            is_literal: true,
            source: Source::Ascii(AsciiInputSource),
        }
    }

    /// Symbolic transformer over a host-supplied layout (usually the live
    /// "current" input source; see the thread confinement note on
    /// [`InputSource`]).
    pub fn symbolic(source: Arc<dyn InputSource>) -> Self {
        Self {
            is_literal: false,
            source: Source::Layout(source),
        }
    }

    /// Literal transformer over a host-supplied layout.
    pub fn literal(source: Arc<dyn InputSource>) -> Self {
        Self {
            is_literal: true,
            source: Source::Layout(source),
        }
    }

    pub fn is_literal(&self) -> bool {
        self.is_literal
    }

    pub fn uses_ascii_capable_source(&self) -> bool {
        matches!(self.source, Source::Ascii(_))
    }

    fn resolve(&self, key_code: u16, flags: ModifierFlags) -> Option<String> {
        match &self.source {
            Source::Ascii(source) => source.character_for_key(key_code, flags),
            Source::Layout(source) => source.character_for_key(key_code, flags),
        }
    }

    /// Produces the display string for a key code.
    ///
    /// `implicit` are the modifiers already baked into the character the
    /// layout produces (Option in "å"); `explicit` are the modifiers to
    /// prepend for display (Shift in "⇧⇤"). The two sets must not share any
    /// bit; an overlap is a caller bug and fails with
    /// [`Error::OverlappingModifierFlags`].
    ///
    /// Returns `Ok(None)` when the key code has no character in the layout
    /// (dead key, unmapped code): "cannot display", not an empty shortcut.
    pub fn transform(
        &self,
        key_code: u16,
        implicit: ModifierFlags,
        explicit: ModifierFlags,
        direction: LayoutDirection,
    ) -> Result<Option<String>, Error> {
        let overlap = implicit & explicit;
        if !overlap.is_empty() {
            return Err(Error::OverlappingModifierFlags(overlap));
        }

        if key_code == KEY_NONE {
            return Ok(Some(String::new()));
        }

        let prefix = if self.is_literal {
            explicit.literal_prefix(direction)
        } else {
            explicit.symbolic_prefix(direction)
        };

        if let Some(key) = keycodes::special_key(key_code) {
            let body = if self.is_literal {
                key.literal.to_string()
            } else {
                let shift = explicit.contains(ModifierFlags::SHIFT);
                let mut symbol = if shift { key.shifted_symbol } else { None }.or(key.symbol);

                if direction == LayoutDirection::RightToLeft {
                    if shift && key.shifted_symbol.is_some() {
                        // the mirror of the shifted variant is the plain glyph
                        symbol = key.symbol;
                    } else if key.mirrored_symbol.is_some() {
                        symbol = key.mirrored_symbol;
                    }
                }

                match symbol {
                    Some(c) => c.to_string(),
                    // e.g. Help, which only has a literal
                    None => key.literal.to_string(),
                }
            };

            return Ok(Some(format!("{prefix}{body}")));
        }

        let Some(character) = self.resolve(key_code, implicit) else {
            log::debug!(
                "key code {key_code} has no character under flags {implicit:?} in this layout"
            );
            return Ok(None);
        };

        Ok(Some(format!("{prefix}{}", character.to_uppercase())))
    }

    /// Same as [`transform`](Self::transform) with no implicit modifiers and
    /// left-to-right direction; the common path for rendering a recorded
    /// shortcut.
    pub fn display_string(
        &self,
        key_code: u16,
        explicit: ModifierFlags,
    ) -> Result<Option<String>, Error> {
        self.transform(
            key_code,
            ModifierFlags::empty(),
            explicit,
            LayoutDirection::LeftToRight,
        )
    }

    /// Best-effort reverse transform from a display or key-equivalent string
    /// back to a key code.
    ///
    /// Supported on ASCII-capable variants only; many unicode strings have
    /// no key-code origin and yield `None`. Accepts special glyphs and their
    /// AppKit function-key aliases, literal special names ("Tab", "F13"),
    /// plain key names ("space") and single ASCII layout characters.
    pub fn key_code_for_string(&self, s: &str) -> Option<u16> {
        if !self.uses_ascii_capable_source() {
            log::warn!("reverse key code lookup requested on a non-ASCII transformer");
            return None;
        }

        let mut chars = s.chars();
        let first = chars.next()?;

        if chars.next().is_none() {
            if let Some(code) = keycodes::key_code_for_glyph(first) {
                return Some(code);
            }
            return input_source::ascii_key_code_for_char(first)
                .or_else(|| input_source::ascii_key_code_for_char(first.to_ascii_lowercase()));
        }

        keycodes::SPECIAL_KEY_CODES
            .iter()
            .copied()
            .find(|&code| keycodes::special_literal(code) == Some(s))
            .or_else(|| keycodes::key_name_to_code(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::*;

    #[test]
    fn command_a_symbolic_and_literal() {
        let symbolic = KeyCodeTransformer::symbolic_ascii();
        let literal = KeyCodeTransformer::literal_ascii();

        assert_eq!(
            symbolic
                .display_string(KEY_A, ModifierFlags::COMMAND)
                .unwrap(),
            Some("⌘A".to_string())
        );
        assert_eq!(
            literal
                .display_string(KEY_A, ModifierFlags::COMMAND)
                .unwrap(),
            Some("Command-A".to_string())
        );
    }

    #[test]
    fn none_key_code_renders_empty() {
        let t = KeyCodeTransformer::symbolic_ascii();
        assert_eq!(
            t.display_string(KEY_NONE, ModifierFlags::COMMAND).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn overlapping_flags_are_a_contract_error() {
        let t = KeyCodeTransformer::symbolic_ascii();
        let err = t
            .transform(
                KEY_A,
                ModifierFlags::SHIFT,
                ModifierFlags::SHIFT,
                LayoutDirection::LeftToRight,
            )
            .unwrap_err();
        assert_eq!(err, Error::OverlappingModifierFlags(ModifierFlags::SHIFT));
    }

    #[test]
    fn explicit_shift_reverses_tab() {
        let t = KeyCodeTransformer::symbolic_ascii();
        assert_eq!(
            t.display_string(KEY_TAB, ModifierFlags::empty()).unwrap(),
            Some("⇥".to_string())
        );
        assert_eq!(
            t.display_string(KEY_TAB, ModifierFlags::SHIFT).unwrap(),
            Some("⇧⇤".to_string())
        );
    }

    #[test]
    fn rtl_mirrors_directional_glyphs() {
        let t = KeyCodeTransformer::symbolic_ascii();
        let left = t
            .transform(
                KEY_LEFT,
                ModifierFlags::empty(),
                ModifierFlags::empty(),
                LayoutDirection::RightToLeft,
            )
            .unwrap();
        assert_eq!(left, Some("→".to_string()));

        let tab = t
            .transform(
                KEY_TAB,
                ModifierFlags::empty(),
                ModifierFlags::SHIFT,
                LayoutDirection::RightToLeft,
            )
            .unwrap();
        // shifted tab mirrored back to ⇥, modifiers reversed (single one here)
        assert_eq!(tab, Some("⇧⇥".to_string()));
    }

    #[test]
    fn literal_special_keys_ignore_shift_variant() {
        let t = KeyCodeTransformer::literal_ascii();
        assert_eq!(
            t.display_string(KEY_TAB, ModifierFlags::SHIFT).unwrap(),
            Some("Shift-Tab".to_string())
        );
        assert_eq!(
            t.display_string(KEY_HELP, ModifierFlags::empty()).unwrap(),
            Some("Help".to_string())
        );
    }

    #[test]
    fn implicit_option_resolves_alternate_character() {
        let t = KeyCodeTransformer::symbolic_ascii();
        let s = t
            .transform(
                KEY_A,
                ModifierFlags::OPTION,
                ModifierFlags::empty(),
                LayoutDirection::LeftToRight,
            )
            .unwrap();
        assert_eq!(s, Some("Å".to_string()));
    }

    #[test]
    fn dead_key_yields_no_result() {
        let t = KeyCodeTransformer::symbolic_ascii();
        let s = t
            .transform(
                KEY_E,
                ModifierFlags::OPTION,
                ModifierFlags::empty(),
                LayoutDirection::LeftToRight,
            )
            .unwrap();
        assert_eq!(s, None);
    }

    #[test]
    fn reverse_lookup_on_ascii_variants_only() {
        let ascii = KeyCodeTransformer::symbolic_ascii();
        assert_eq!(ascii.key_code_for_string("a"), Some(KEY_A));
        assert_eq!(ascii.key_code_for_string("A"), Some(KEY_A));
        assert_eq!(ascii.key_code_for_string("⇥"), Some(KEY_TAB));
        assert_eq!(ascii.key_code_for_string("Tab"), Some(KEY_TAB));
        assert_eq!(ascii.key_code_for_string("F13"), Some(KEY_F13));
        assert_eq!(ascii.key_code_for_string("å"), None);
        assert_eq!(ascii.key_code_for_string(""), None);

        let layout = KeyCodeTransformer::symbolic(Arc::new(AsciiInputSource));
        assert_eq!(layout.key_code_for_string("a"), None);
    }
}
