//! Keyboard input source abstraction.
//!
//! An input source resolves a hardware key code to the character a layout
//! would type for it. The OS text-input subsystem owns the live layout and
//! its API is not thread safe, so implementations that wrap it must be
//! confined to the thread that services UI events; they must also re-resolve
//! the underlying layout handle on every call rather than cache it, or they
//! will keep translating against a layout the user already switched away
//! from. The built-in [`AsciiInputSource`] is a fixed table and free of both
//! constraints.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::keycodes::*;
use crate::modifiers::ModifierFlags;

/// Horizontal direction of the user interface layout. Right-to-left swaps
/// directional glyphs and reverses the modifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// A keyboard layout capable of resolving key codes to characters.
///
/// `modifier_flags` are the implicit modifiers baked into the translation
/// (Option in "å"); Command and Control never alter the character and are
/// ignored. Returns `None` for dead keys and for codes the layout does not
/// map; callers treat that as "cannot display", not as an error.
pub trait InputSource: Send + Sync {
    /// Stable identifier of the underlying layout (e.g. "com.apple.keylayout.US").
    fn identifier(&self) -> &str;

    fn character_for_key(&self, key_code: u16, modifier_flags: ModifierFlags) -> Option<String>;
}

/// The fixed ASCII-capable input source (US ANSI layout).
///
/// Used by the ASCII transformer variants so that persisted shortcuts render
/// identically regardless of the layout active at recording time.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiInputSource;

impl InputSource for AsciiInputSource {
    fn identifier(&self) -> &str {
        "ascii-capable.us"
    }

    fn character_for_key(&self, key_code: u16, modifier_flags: ModifierFlags) -> Option<String> {
        let c = if modifier_flags.contains(ModifierFlags::OPTION) {
            if modifier_flags.contains(ModifierFlags::SHIFT) {
                // Shift-Option layer is not modeled by the fixed table
                return None;
            }
            option_char(key_code)?
        } else if modifier_flags.contains(ModifierFlags::SHIFT) {
            shifted_char(key_code)?
        } else {
            base_char(key_code)?
        };

        Some(c.to_string())
    }
}

/// Key codes the fixed ASCII layout maps to printable characters. Main key
/// area first so reverse lookups prefer it over the keypad duplicates.
const LAYOUT_KEY_CODES: &[u16] = &[
    KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F, KEY_G, KEY_H, KEY_I, KEY_J, KEY_K, KEY_L, KEY_M,
    KEY_N, KEY_O, KEY_P, KEY_Q, KEY_R, KEY_S, KEY_T, KEY_U, KEY_V, KEY_W, KEY_X, KEY_Y, KEY_Z,
    KEY_0, KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8, KEY_9, KEY_EQUAL, KEY_MINUS,
    KEY_LEFT_BRACKET, KEY_RIGHT_BRACKET, KEY_QUOTE, KEY_SEMICOLON, KEY_BACKSLASH, KEY_COMMA,
    KEY_SLASH, KEY_PERIOD, KEY_GRAVE, KEYPAD_0, KEYPAD_1, KEYPAD_2, KEYPAD_3, KEYPAD_4, KEYPAD_5,
    KEYPAD_6, KEYPAD_7, KEYPAD_8, KEYPAD_9, KEYPAD_DECIMAL, KEYPAD_MULTIPLY, KEYPAD_PLUS,
    KEYPAD_DIVIDE, KEYPAD_MINUS, KEYPAD_EQUALS,
];

fn base_char(key_code: u16) -> Option<char> {
    let c = match key_code {
        KEY_A => 'a',
        KEY_B => 'b',
        KEY_C => 'c',
        KEY_D => 'd',
        KEY_E => 'e',
        KEY_F => 'f',
        KEY_G => 'g',
        KEY_H => 'h',
        KEY_I => 'i',
        KEY_J => 'j',
        KEY_K => 'k',
        KEY_L => 'l',
        KEY_M => 'm',
        KEY_N => 'n',
        KEY_O => 'o',
        KEY_P => 'p',
        KEY_Q => 'q',
        KEY_R => 'r',
        KEY_S => 's',
        KEY_T => 't',
        KEY_U => 'u',
        KEY_V => 'v',
        KEY_W => 'w',
        KEY_X => 'x',
        KEY_Y => 'y',
        KEY_Z => 'z',
        KEY_0 => '0',
        KEY_1 => '1',
        KEY_2 => '2',
        KEY_3 => '3',
        KEY_4 => '4',
        KEY_5 => '5',
        KEY_6 => '6',
        KEY_7 => '7',
        KEY_8 => '8',
        KEY_9 => '9',
        KEY_EQUAL => '=',
        KEY_MINUS => '-',
        KEY_LEFT_BRACKET => '[',
        KEY_RIGHT_BRACKET => ']',
        KEY_QUOTE => '\'',
        KEY_SEMICOLON => ';',
        KEY_BACKSLASH => '\\',
        KEY_COMMA => ',',
        KEY_SLASH => '/',
        KEY_PERIOD => '.',
        KEY_GRAVE => '`',
        KEYPAD_0 => '0',
        KEYPAD_1 => '1',
        KEYPAD_2 => '2',
        KEYPAD_3 => '3',
        KEYPAD_4 => '4',
        KEYPAD_5 => '5',
        KEYPAD_6 => '6',
        KEYPAD_7 => '7',
        KEYPAD_8 => '8',
        KEYPAD_9 => '9',
        KEYPAD_DECIMAL => '.',
        KEYPAD_MULTIPLY => '*',
        KEYPAD_PLUS => '+',
        KEYPAD_DIVIDE => '/',
        KEYPAD_MINUS => '-',
        KEYPAD_EQUALS => '=',
        _ => return None,
    };
    Some(c)
}

fn shifted_char(key_code: u16) -> Option<char> {
    let c = match key_code {
        KEY_1 => '!',
        KEY_2 => '@',
        KEY_3 => '#',
        KEY_4 => '$',
        KEY_5 => '%',
        KEY_6 => '^',
        KEY_7 => '&',
        KEY_8 => '*',
        KEY_9 => '(',
        KEY_0 => ')',
        KEY_EQUAL => '+',
        KEY_MINUS => '_',
        KEY_LEFT_BRACKET => '{',
        KEY_RIGHT_BRACKET => '}',
        KEY_QUOTE => '"',
        KEY_SEMICOLON => ':',
        KEY_BACKSLASH => '|',
        KEY_COMMA => '<',
        KEY_SLASH => '?',
        KEY_PERIOD => '>',
        KEY_GRAVE => '~',
        _ => return Some(base_char(key_code)?.to_ascii_uppercase()),
    };
    Some(c)
}

/// US layout Option layer. Option-e/i/n/u and Option-` are dead keys and
/// yield no character on their own.
fn option_char(key_code: u16) -> Option<char> {
    let c = match key_code {
        KEY_A => 'å',
        KEY_B => '∫',
        KEY_C => 'ç',
        KEY_D => '∂',
        KEY_F => 'ƒ',
        KEY_G => '©',
        KEY_H => '˙',
        KEY_J => '∆',
        KEY_K => '˚',
        KEY_L => '¬',
        KEY_M => 'µ',
        KEY_O => 'ø',
        KEY_P => 'π',
        KEY_Q => 'œ',
        KEY_R => '®',
        KEY_S => 'ß',
        KEY_T => '†',
        KEY_V => '√',
        KEY_W => '∑',
        KEY_X => '≈',
        KEY_Y => '¥',
        KEY_Z => 'Ω',
        KEY_1 => '¡',
        KEY_2 => '™',
        KEY_3 => '£',
        KEY_4 => '¢',
        KEY_5 => '∞',
        KEY_6 => '§',
        KEY_7 => '¶',
        KEY_8 => '•',
        KEY_9 => 'ª',
        KEY_0 => 'º',
        KEY_MINUS => '–',
        KEY_EQUAL => '≠',
        KEY_LEFT_BRACKET => '“',
        KEY_RIGHT_BRACKET => '‘',
        KEY_QUOTE => 'æ',
        KEY_SEMICOLON => '…',
        KEY_BACKSLASH => '«',
        KEY_COMMA => '≤',
        KEY_SLASH => '÷',
        KEY_PERIOD => '≥',
        // dead keys
        KEY_E | KEY_I | KEY_N | KEY_U | KEY_GRAVE => return None,
        _ => return None,
    };
    Some(c)
}

lazy_static! {
    /// Character -> key code reverse map over the base and shifted layers of
    /// the fixed ASCII layout.
    static ref ASCII_REVERSE: HashMap<char, u16> = {
        let mut map = HashMap::new();
        for &code in LAYOUT_KEY_CODES {
            if let Some(c) = base_char(code) {
                map.entry(c).or_insert(code);
            }
            if let Some(c) = shifted_char(code) {
                map.entry(c).or_insert(code);
            }
        }
        map
    };
}

/// Reverse lookup against the fixed ASCII layout. Uppercase letters map to
/// the same key code as their lowercase form.
pub(crate) fn ascii_key_code_for_char(c: char) -> Option<u16> {
    ASCII_REVERSE.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_and_shifted_characters() {
        let source = AsciiInputSource;
        assert_eq!(
            source.character_for_key(KEY_A, ModifierFlags::empty()),
            Some("a".to_string())
        );
        assert_eq!(
            source.character_for_key(KEY_A, ModifierFlags::SHIFT),
            Some("A".to_string())
        );
        assert_eq!(
            source.character_for_key(KEY_1, ModifierFlags::SHIFT),
            Some("!".to_string())
        );
    }

    #[test]
    fn option_layer_produces_alternates() {
        let source = AsciiInputSource;
        assert_eq!(
            source.character_for_key(KEY_A, ModifierFlags::OPTION),
            Some("å".to_string())
        );
        assert_eq!(
            source.character_for_key(KEY_S, ModifierFlags::OPTION),
            Some("ß".to_string())
        );
    }

    #[test]
    fn dead_keys_do_not_resolve() {
        let source = AsciiInputSource;
        assert_eq!(source.character_for_key(KEY_E, ModifierFlags::OPTION), None);
        assert_eq!(source.character_for_key(KEY_N, ModifierFlags::OPTION), None);
    }

    #[test]
    fn command_does_not_alter_the_character() {
        let source = AsciiInputSource;
        assert_eq!(
            source.character_for_key(KEY_A, ModifierFlags::COMMAND),
            Some("a".to_string())
        );
    }

    #[test]
    fn unmapped_key_codes_do_not_resolve() {
        let source = AsciiInputSource;
        assert_eq!(source.character_for_key(KEY_F1, ModifierFlags::empty()), None);
        assert_eq!(source.character_for_key(KEY_NONE, ModifierFlags::empty()), None);
    }

    #[test]
    fn reverse_lookup_prefers_main_key_area() {
        assert_eq!(ascii_key_code_for_char('0'), Some(KEY_0));
        assert_eq!(ascii_key_code_for_char('='), Some(KEY_EQUAL));
        assert_eq!(ascii_key_code_for_char('a'), Some(KEY_A));
        assert_eq!(ascii_key_code_for_char('?'), Some(KEY_SLASH));
        assert_eq!(ascii_key_code_for_char('å'), None);
    }
}
