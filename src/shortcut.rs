//! The recorded shortcut value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::Error;
use crate::input_source::{AsciiInputSource, InputSource};
use crate::keycodes::KEY_NONE;
use crate::modifiers::{ModifierFlags, flag_bits};
use crate::transformer::KeyCodeTransformer;

/// Dictionary keys of the compatibility representation. The raw strings must
/// not change; persisted shortcuts depend on them.
pub const KEY_KEY_CODE: &str = "keyCode";
pub const KEY_MODIFIER_FLAGS: &str = "modifierFlags";
pub const KEY_CHARACTERS: &str = "characters";
pub const KEY_CHARACTERS_IGNORING_MODIFIERS: &str = "charactersIgnoringModifiers";

/// A raw keyboard event as delivered by the recorder UI.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub key_code: u16,
    /// Raw native modifier flag word; bits outside the four shortcut
    /// modifiers are masked off during capture.
    pub modifier_flags: u64,
    pub characters: Option<String>,
    pub characters_ignoring_modifiers: Option<String>,
}

/// Combination of a key code, modifier flags and optionally their character
/// representation at the time of recording.
///
/// The two character strings depend on the locale and input source active
/// when the shortcut was taken; they are metadata and do not participate in
/// equality or hashing. Constructed once, never mutated, safe to share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shortcut {
    #[serde(rename = "keyCode")]
    key_code: u16,
    #[serde(rename = "modifierFlags", with = "flag_bits", default)]
    modifier_flags: ModifierFlags,
    #[serde(rename = "characters", default, skip_serializing_if = "Option::is_none")]
    characters: Option<String>,
    #[serde(
        rename = "charactersIgnoringModifiers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    characters_ignoring_modifiers: Option<String>,
}

impl Shortcut {
    /// Creates a shortcut from explicit fields.
    ///
    /// Omitted character strings are filled in through the ASCII-capable
    /// transformers (symbolic for `characters`, literal for
    /// `characters_ignoring_modifiers`) and left `None` when the key code
    /// does not resolve.
    pub fn new(
        key_code: u16,
        modifier_flags: ModifierFlags,
        characters: Option<String>,
        characters_ignoring_modifiers: Option<String>,
    ) -> Self {
        let characters = characters.or_else(|| {
            KeyCodeTransformer::symbolic_ascii()
                .transform(
                    key_code,
                    modifier_flags,
                    ModifierFlags::empty(),
                    Default::default(),
                )
                .ok()
                .flatten()
        });
        let characters_ignoring_modifiers = characters_ignoring_modifiers.or_else(|| {
            KeyCodeTransformer::literal_ascii()
                .display_string(key_code, ModifierFlags::empty())
                .ok()
                .flatten()
        });

        Self {
            key_code,
            modifier_flags,
            characters,
            characters_ignoring_modifiers,
        }
    }

    /// Creates a shortcut from a raw keyboard event, masking the flag word
    /// down to the four shortcut modifiers.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            key_code: event.key_code,
            modifier_flags: ModifierFlags::from_bits_masked(event.modifier_flags),
            characters: event.characters.clone(),
            characters_ignoring_modifiers: event.characters_ignoring_modifiers.clone(),
        }
    }

    /// Creates a shortcut from the legacy dictionary representation.
    ///
    /// The key-code entry is required; modifier flags default to none;
    /// character entries may be absent or null. Character strings are stored
    /// as given, never re-derived.
    pub fn from_dictionary(dictionary: &Value) -> Result<Self, Error> {
        let dict = dictionary.as_object().ok_or(Error::MissingKeyCode)?;

        let key_code = match dict.get(KEY_KEY_CODE) {
            None | Some(Value::Null) => return Err(Error::MissingKeyCode),
            Some(value) => value
                .as_u64()
                .filter(|code| *code <= u64::from(u16::MAX))
                .ok_or(Error::InvalidDictionaryEntry(KEY_KEY_CODE))? as u16,
        };

        let modifier_flags = match dict.get(KEY_MODIFIER_FLAGS) {
            None | Some(Value::Null) => ModifierFlags::empty(),
            Some(value) => ModifierFlags::from_bits_masked(
                value
                    .as_u64()
                    .ok_or(Error::InvalidDictionaryEntry(KEY_MODIFIER_FLAGS))?,
            ),
        };

        Ok(Self {
            key_code,
            modifier_flags,
            characters: dictionary_string(dict, KEY_CHARACTERS)?,
            characters_ignoring_modifiers: dictionary_string(
                dict,
                KEY_CHARACTERS_IGNORING_MODIFIERS,
            )?,
        })
    }

    /// Creates a shortcut from a Cocoa-style key equivalent ("⇧⌘A") plus
    /// additional modifier flags.
    ///
    /// Leading modifier glyphs are parsed in canonical order, an uppercase
    /// ASCII letter folds Shift into the flags, and the remaining character
    /// is reverse-mapped through the ASCII-capable transformer. Returns
    /// `None` when the character has no known key-code origin.
    pub fn from_key_equivalent(key_equivalent: &str, modifier_flags: ModifierFlags) -> Option<Self> {
        let (parsed, rest) = split_key_equivalent(key_equivalent);
        let (folded, rest) = fold_uppercase(rest);
        if rest.is_empty() {
            return None;
        }

        let key_code = KeyCodeTransformer::symbolic_ascii().key_code_for_string(&rest)?;
        Some(Self::new(
            key_code,
            modifier_flags | parsed | folded,
            None,
            None,
        ))
    }

    pub fn key_code(&self) -> u16 {
        self.key_code
    }

    pub fn modifier_flags(&self) -> ModifierFlags {
        self.modifier_flags
    }

    pub fn characters(&self) -> Option<&str> {
        self.characters.as_deref()
    }

    pub fn characters_ignoring_modifiers(&self) -> Option<&str> {
        self.characters_ignoring_modifiers.as_deref()
    }

    /// The legacy dictionary representation: four fixed keys, character
    /// entries omitted when absent. `from_dictionary(to_dictionary(s))`
    /// equals `s`.
    pub fn to_dictionary(&self) -> Value {
        let mut dict = Map::new();
        dict.insert(KEY_KEY_CODE.to_string(), json!(self.key_code));
        dict.insert(
            KEY_MODIFIER_FLAGS.to_string(),
            json!(self.modifier_flags.bits()),
        );
        if let Some(characters) = &self.characters {
            dict.insert(KEY_CHARACTERS.to_string(), Value::String(characters.clone()));
        }
        if let Some(ignoring) = &self.characters_ignoring_modifiers {
            dict.insert(
                KEY_CHARACTERS_IGNORING_MODIFIERS.to_string(),
                Value::String(ignoring.clone()),
            );
        }

        Value::Object(dict)
    }

    /// Compares against a dictionary representation.
    pub fn is_equal_to_dictionary(&self, dictionary: &Value) -> bool {
        Self::from_dictionary(dictionary)
            .map(|shortcut| shortcut == *self)
            .unwrap_or(false)
    }

    /// Compares against a Cocoa-style key equivalent and its modifier mask.
    ///
    /// Handles the two representations the direct field comparison misses:
    /// special keys never carry Shift in the key-equivalent string (it lives
    /// in the mask instead), and a key combination can be written through
    /// its layout alternate (Option-A as "å").
    pub fn is_equal_to_key_equivalent(
        &self,
        key_equivalent: &str,
        modifier_flags: ModifierFlags,
    ) -> bool {
        let (parsed, rest) = split_key_equivalent(key_equivalent);
        let (folded, rest) = fold_uppercase(rest);
        if rest.is_empty() {
            return false;
        }

        let flags = modifier_flags | parsed | folded;

        if let Some(key_code) = KeyCodeTransformer::symbolic_ascii().key_code_for_string(&rest) {
            return key_code == self.key_code && flags == self.modifier_flags;
        }

        // Alternate representation: the character carries extra modifiers
        // baked in. Re-resolve our key code under the flag difference and
        // compare the characters.
        if self.modifier_flags.contains(flags) {
            let implicit = self.modifier_flags - flags;
            if !implicit.is_empty() {
                if let Some(resolved) =
                    AsciiInputSource.character_for_key(self.key_code, implicit)
                {
                    return resolved.to_lowercase() == rest.to_lowercase();
                }
            }
        }

        false
    }

    /// Symbolic display string, e.g. "⌘A". `None` when the key code cannot
    /// be rendered by the ASCII-capable layout.
    pub fn symbolic_description(&self) -> Option<String> {
        KeyCodeTransformer::symbolic_ascii()
            .display_string(self.key_code, self.modifier_flags)
            .ok()
            .flatten()
    }

    /// Literal display string, e.g. "Command-A".
    pub fn literal_description(&self) -> Option<String> {
        KeyCodeTransformer::literal_ascii()
            .display_string(self.key_code, self.modifier_flags)
            .ok()
            .flatten()
    }
}

impl PartialEq for Shortcut {
    fn eq(&self, other: &Self) -> bool {
        self.key_code == other.key_code && self.modifier_flags == other.modifier_flags
    }
}

impl Eq for Shortcut {}

impl Hash for Shortcut {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_code.hash(state);
        self.modifier_flags.bits().hash(state);
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbolic_description() {
            Some(s) => f.write_str(&s),
            None if self.key_code == KEY_NONE => Ok(()),
            None => write!(
                f,
                "{}key code {}",
                self.modifier_flags.symbolic_prefix(Default::default()),
                self.key_code
            ),
        }
    }
}

fn dictionary_string(dict: &Map<String, Value>, key: &'static str) -> Result<Option<String>, Error> {
    match dict.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::InvalidDictionaryEntry(key)),
    }
}

/// Strips leading modifier glyphs (⌃⌥⇧⌘) off a key equivalent.
fn split_key_equivalent(s: &str) -> (ModifierFlags, &str) {
    let mut flags = ModifierFlags::empty();
    let mut rest = s;

    while let Some((flag, tail)) = ModifierFlags::strip_glyph(rest) {
        flags |= flag;
        rest = tail;
    }

    (flags, rest)
}

/// A single uppercase ASCII letter in a key equivalent implies Shift.
fn fold_uppercase(s: &str) -> (ModifierFlags, String) {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => {
            (ModifierFlags::SHIFT, c.to_ascii_lowercase().to_string())
        }
        _ => (ModifierFlags::empty(), s.to_string()),
    }
}
