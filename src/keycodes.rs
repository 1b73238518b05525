// macOS Virtual Key Codes
// Reference: https://developer.apple.com/documentation/appkit/nsevent/specialkey
//
// Note: Key codes represent physical keys, not symbols.
// Shifted symbols (like @, #, $, |, _, etc.) use the same key code
// as their unshifted counterpart, just with the Shift flag added.

/// Sentinel meaning "no key recorded".
pub const KEY_NONE: u16 = 0xFFFF;

// ====== Letter Keys ======

pub const KEY_A: u16 = 0;
pub const KEY_S: u16 = 1;
pub const KEY_D: u16 = 2;
pub const KEY_F: u16 = 3;
pub const KEY_H: u16 = 4;
pub const KEY_G: u16 = 5;
pub const KEY_Z: u16 = 6;
pub const KEY_X: u16 = 7;
pub const KEY_C: u16 = 8;
pub const KEY_V: u16 = 9;
pub const KEY_B: u16 = 11;
pub const KEY_Q: u16 = 12;
pub const KEY_W: u16 = 13;
pub const KEY_E: u16 = 14;
pub const KEY_R: u16 = 15;
pub const KEY_Y: u16 = 16;
pub const KEY_T: u16 = 17;
pub const KEY_O: u16 = 31;
pub const KEY_U: u16 = 32;
pub const KEY_I: u16 = 34;
pub const KEY_P: u16 = 35;
pub const KEY_L: u16 = 37;
pub const KEY_J: u16 = 38;
pub const KEY_K: u16 = 40;
pub const KEY_N: u16 = 45;
pub const KEY_M: u16 = 46;

// ====== Number Keys (Top Row) ======
// Shift+Number produces !, @, #, $, %, ^, &, *, (, )

pub const KEY_1: u16 = 18;
pub const KEY_2: u16 = 19;
pub const KEY_3: u16 = 20;
pub const KEY_4: u16 = 21;
pub const KEY_6: u16 = 22;
pub const KEY_5: u16 = 23;
pub const KEY_EQUAL: u16 = 24; // = (Shift = +)
pub const KEY_9: u16 = 25;
pub const KEY_7: u16 = 26;
pub const KEY_MINUS: u16 = 27; // - (Shift = _)
pub const KEY_8: u16 = 28;
pub const KEY_0: u16 = 29;

// ====== Keypad ======

pub const KEYPAD_0: u16 = 82;
pub const KEYPAD_1: u16 = 83;
pub const KEYPAD_2: u16 = 84;
pub const KEYPAD_3: u16 = 85;
pub const KEYPAD_4: u16 = 86;
pub const KEYPAD_5: u16 = 87;
pub const KEYPAD_6: u16 = 88;
pub const KEYPAD_7: u16 = 89;
pub const KEYPAD_8: u16 = 91;
pub const KEYPAD_9: u16 = 92;

pub const KEYPAD_DECIMAL: u16 = 65;
pub const KEYPAD_MULTIPLY: u16 = 67;
pub const KEYPAD_PLUS: u16 = 69;
pub const KEYPAD_CLEAR: u16 = 71;
pub const KEYPAD_DIVIDE: u16 = 75;
pub const KEYPAD_ENTER: u16 = 76;
pub const KEYPAD_MINUS: u16 = 78;
pub const KEYPAD_EQUALS: u16 = 81;

// ====== Function Keys ======

pub const KEY_F1: u16 = 122;
pub const KEY_F2: u16 = 120;
pub const KEY_F3: u16 = 99;
pub const KEY_F4: u16 = 118;
pub const KEY_F5: u16 = 96;
pub const KEY_F6: u16 = 97;
pub const KEY_F7: u16 = 98;
pub const KEY_F8: u16 = 100;
pub const KEY_F9: u16 = 101;
pub const KEY_F10: u16 = 109;
pub const KEY_F11: u16 = 103;
pub const KEY_F12: u16 = 111;
pub const KEY_F13: u16 = 105;
pub const KEY_F14: u16 = 107;
pub const KEY_F15: u16 = 113;
pub const KEY_F16: u16 = 106;
pub const KEY_F17: u16 = 64;
pub const KEY_F18: u16 = 79;
pub const KEY_F19: u16 = 80;
pub const KEY_F20: u16 = 90;

// ====== Arrow Keys ======

pub const KEY_LEFT: u16 = 123;
pub const KEY_RIGHT: u16 = 124;
pub const KEY_DOWN: u16 = 125;
pub const KEY_UP: u16 = 126;

// ====== Special Keys ======

pub const KEY_RETURN: u16 = 36;
pub const KEY_TAB: u16 = 48;
pub const KEY_SPACE: u16 = 49;
pub const KEY_DELETE: u16 = 51; // Backspace
pub const KEY_ESCAPE: u16 = 53;
pub const KEY_FORWARD_DELETE: u16 = 117; // Del key
pub const KEY_HELP: u16 = 114;
pub const KEY_HOME: u16 = 115;
pub const KEY_END: u16 = 119;
pub const KEY_PAGE_UP: u16 = 116;
pub const KEY_PAGE_DOWN: u16 = 121;

// ====== Punctuation & Symbols ======

pub const KEY_LEFT_BRACKET: u16 = 33; // [  (Shift = {)
pub const KEY_RIGHT_BRACKET: u16 = 30; // ]  (Shift = })
pub const KEY_QUOTE: u16 = 39; // '  (Shift = ")
pub const KEY_SEMICOLON: u16 = 41; // ;  (Shift = :)
pub const KEY_BACKSLASH: u16 = 42; // \  (Shift = |)
pub const KEY_COMMA: u16 = 43; // ,  (Shift = <)
pub const KEY_SLASH: u16 = 44; // /  (Shift = ?)
pub const KEY_PERIOD: u16 = 47; // .  (Shift = >)
pub const KEY_GRAVE: u16 = 50; // `  (Shift = ~)

// ====== JIS Keyboard Keys ======

pub const KEY_JIS_YEN: u16 = 93; // ¥
pub const KEY_JIS_UNDERSCORE: u16 = 94; // ＿
pub const KEY_JIS_KEYPAD_COMMA: u16 = 95; // 、

// ====== Special Key Translation Table ======

/// Glyph/literal pair for a key code that has no printable character of its
/// own (arrows, function keys, escape, delete and friends).
///
/// `shifted_symbol` is the variant drawn when Shift is held explicitly
/// (Tab ⇥ vs. Shift-Tab ⇤). `mirrored_symbol` is the variant used in
/// right-to-left layouts for directional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialKey {
    pub symbol: Option<char>,
    pub shifted_symbol: Option<char>,
    pub mirrored_symbol: Option<char>,
    pub literal: &'static str,
}

impl SpecialKey {
    const fn new(symbol: char, literal: &'static str) -> Self {
        Self {
            symbol: Some(symbol),
            shifted_symbol: None,
            mirrored_symbol: None,
            literal,
        }
    }
}

/// All key codes present in the special key table, useful for building
/// reverse lookups and for exhaustive tests.
pub const SPECIAL_KEY_CODES: &[u16] = &[
    KEY_TAB,
    KEY_RETURN,
    KEYPAD_ENTER,
    KEY_DELETE,
    KEY_FORWARD_DELETE,
    KEY_ESCAPE,
    KEYPAD_CLEAR,
    KEY_SPACE,
    KEY_HELP,
    KEY_LEFT,
    KEY_RIGHT,
    KEY_UP,
    KEY_DOWN,
    KEY_PAGE_UP,
    KEY_PAGE_DOWN,
    KEY_HOME,
    KEY_END,
    KEY_JIS_YEN,
    KEY_JIS_UNDERSCORE,
    KEY_JIS_KEYPAD_COMMA,
    KEY_F1,
    KEY_F2,
    KEY_F3,
    KEY_F4,
    KEY_F5,
    KEY_F6,
    KEY_F7,
    KEY_F8,
    KEY_F9,
    KEY_F10,
    KEY_F11,
    KEY_F12,
    KEY_F13,
    KEY_F14,
    KEY_F15,
    KEY_F16,
    KEY_F17,
    KEY_F18,
    KEY_F19,
    KEY_F20,
];

/// Look up the translation table entry for a special key code.
///
/// Returns `None` for any key code not in the table; callers are expected to
/// fall through to layout-driven character translation.
pub fn special_key(key_code: u16) -> Option<&'static SpecialKey> {
    match key_code {
        KEY_TAB => Some(&SpecialKey {
            symbol: Some('\u{21E5}'),          // ⇥
            shifted_symbol: Some('\u{21E4}'),  // ⇤
            mirrored_symbol: Some('\u{21E4}'), // ⇤
            literal: "Tab",
        }),
        KEY_RETURN => Some(&SpecialKey {
            symbol: Some('\u{2305}'), // ⌅
            shifted_symbol: None,
            mirrored_symbol: Some('\u{21A9}'), // ↩
            literal: "Return",
        }),
        KEYPAD_ENTER => Some(const { &SpecialKey::new('\u{2305}', "Enter") }), // ⌅
        KEY_DELETE => Some(&SpecialKey {
            symbol: Some('\u{232B}'), // ⌫
            shifted_symbol: None,
            mirrored_symbol: Some('\u{2326}'), // ⌦
            literal: "Delete",
        }),
        KEY_FORWARD_DELETE => Some(&SpecialKey {
            symbol: Some('\u{2326}'), // ⌦
            shifted_symbol: None,
            mirrored_symbol: Some('\u{232B}'), // ⌫
            literal: "Forward Delete",
        }),
        KEY_ESCAPE => Some(const { &SpecialKey::new('\u{238B}', "Escape") }), // ⎋
        KEYPAD_CLEAR => Some(const { &SpecialKey::new('\u{2327}', "Clear") }), // ⌧
        KEY_SPACE => Some(const { &SpecialKey::new(' ', "Space") }),
        KEY_HELP => Some(&SpecialKey {
            symbol: None, // no conventional glyph, literal only
            shifted_symbol: None,
            mirrored_symbol: None,
            literal: "Help",
        }),
        KEY_LEFT => Some(&SpecialKey {
            symbol: Some('\u{2190}'), // ←
            shifted_symbol: None,
            mirrored_symbol: Some('\u{2192}'), // →
            literal: "Left Arrow",
        }),
        KEY_RIGHT => Some(&SpecialKey {
            symbol: Some('\u{2192}'), // →
            shifted_symbol: None,
            mirrored_symbol: Some('\u{2190}'), // ←
            literal: "Right Arrow",
        }),
        KEY_UP => Some(const { &SpecialKey::new('\u{2191}', "Up Arrow") }), // ↑
        KEY_DOWN => Some(const { &SpecialKey::new('\u{2193}', "Down Arrow") }), // ↓
        KEY_PAGE_UP => Some(const { &SpecialKey::new('\u{21DE}', "Page Up") }), // ⇞
        KEY_PAGE_DOWN => Some(const { &SpecialKey::new('\u{21DF}', "Page Down") }), // ⇟
        KEY_HOME => Some(const { &SpecialKey::new('\u{2196}', "Home") }), // ↖
        KEY_END => Some(const { &SpecialKey::new('\u{2198}', "End") }),   // ↘
        KEY_JIS_YEN => Some(const { &SpecialKey::new('\u{00A5}', "¥") }),
        KEY_JIS_UNDERSCORE => Some(const { &SpecialKey::new('\u{FF3F}', "＿") }),
        KEY_JIS_KEYPAD_COMMA => Some(const { &SpecialKey::new('\u{3001}', "、") }),
        // F1..F20 map to the AppKit function key code points (NSF1FunctionKey
        // onwards), which is what Cocoa expects in key equivalents.
        KEY_F1 => Some(const { &SpecialKey::new('\u{F704}', "F1") }),
        KEY_F2 => Some(const { &SpecialKey::new('\u{F705}', "F2") }),
        KEY_F3 => Some(const { &SpecialKey::new('\u{F706}', "F3") }),
        KEY_F4 => Some(const { &SpecialKey::new('\u{F707}', "F4") }),
        KEY_F5 => Some(const { &SpecialKey::new('\u{F708}', "F5") }),
        KEY_F6 => Some(const { &SpecialKey::new('\u{F709}', "F6") }),
        KEY_F7 => Some(const { &SpecialKey::new('\u{F70A}', "F7") }),
        KEY_F8 => Some(const { &SpecialKey::new('\u{F70B}', "F8") }),
        KEY_F9 => Some(const { &SpecialKey::new('\u{F70C}', "F9") }),
        KEY_F10 => Some(const { &SpecialKey::new('\u{F70D}', "F10") }),
        KEY_F11 => Some(const { &SpecialKey::new('\u{F70E}', "F11") }),
        KEY_F12 => Some(const { &SpecialKey::new('\u{F70F}', "F12") }),
        KEY_F13 => Some(const { &SpecialKey::new('\u{F710}', "F13") }),
        KEY_F14 => Some(const { &SpecialKey::new('\u{F711}', "F14") }),
        KEY_F15 => Some(const { &SpecialKey::new('\u{F712}', "F15") }),
        KEY_F16 => Some(const { &SpecialKey::new('\u{F713}', "F16") }),
        KEY_F17 => Some(const { &SpecialKey::new('\u{F714}', "F17") }),
        KEY_F18 => Some(const { &SpecialKey::new('\u{F715}', "F18") }),
        KEY_F19 => Some(const { &SpecialKey::new('\u{F716}', "F19") }),
        KEY_F20 => Some(const { &SpecialKey::new('\u{F717}', "F20") }),
        _ => None,
    }
}

/// Whether the key code is in the special key translation table.
pub fn is_special_key_code(key_code: u16) -> bool {
    special_key(key_code).is_some()
}

/// Symbolic glyph for a special key code, honoring the explicit-Shift
/// variant (Tab ⇥ becomes ⇤ when Shift is held).
pub fn special_symbol(key_code: u16, shift_held: bool) -> Option<char> {
    let key = special_key(key_code)?;
    if shift_held {
        key.shifted_symbol.or(key.symbol)
    } else {
        key.symbol
    }
}

/// Literal string for a special key code ("Tab", "F1", "Escape").
pub fn special_literal(key_code: u16) -> Option<&'static str> {
    special_key(key_code).map(|key| key.literal)
}

/// Best-effort reverse lookup from a display or key-equivalent character to
/// the special key code that produces it.
///
/// Accepts the drawable glyphs (←, ⇥, ⌫ …), their shifted/mirrored variants
/// and the AppKit function-key code points Cocoa uses in menu item key
/// equivalents (0xF700 onwards).
pub fn key_code_for_glyph(glyph: char) -> Option<u16> {
    match glyph {
        '\u{21E5}' | '\u{21E4}' | '\u{F72A}' => Some(KEY_TAB), // ⇥ ⇤
        '\u{2305}' | '\u{21A9}' | '\u{000D}' => Some(KEY_RETURN), // ⌅ ↩ CR
        '\u{0003}' => Some(KEYPAD_ENTER),                      // NSEnterCharacter
        '\u{232B}' | '\u{0008}' | '\u{007F}' => Some(KEY_DELETE), // ⌫ BS DEL
        '\u{2326}' | '\u{F728}' => Some(KEY_FORWARD_DELETE),   // ⌦
        '\u{238B}' | '\u{001B}' => Some(KEY_ESCAPE),           // ⎋ ESC
        '\u{2327}' | '\u{F739}' => Some(KEYPAD_CLEAR),         // ⌧
        '\u{2190}' | '\u{F702}' => Some(KEY_LEFT),             // ←
        '\u{2192}' | '\u{F703}' => Some(KEY_RIGHT),            // →
        '\u{2191}' | '\u{F700}' => Some(KEY_UP),               // ↑
        '\u{2193}' | '\u{F701}' => Some(KEY_DOWN),             // ↓
        '\u{21DE}' | '\u{F72C}' => Some(KEY_PAGE_UP),          // ⇞
        '\u{21DF}' | '\u{F72D}' => Some(KEY_PAGE_DOWN),        // ⇟
        '\u{2196}' | '\u{F729}' => Some(KEY_HOME),             // ↖
        '\u{2198}' | '\u{F72B}' => Some(KEY_END),              // ↘
        '\u{F746}' => Some(KEY_HELP),
        '\u{FF3F}' => Some(KEY_JIS_UNDERSCORE), // ＿
        '\u{3001}' => Some(KEY_JIS_KEYPAD_COMMA), // 、
        '\u{00A5}' => Some(KEY_JIS_YEN),        // ¥
        '\u{F704}'..='\u{F717}' => {
            let n = glyph as u32 - 0xF704;
            [
                KEY_F1, KEY_F2, KEY_F3, KEY_F4, KEY_F5, KEY_F6, KEY_F7, KEY_F8, KEY_F9, KEY_F10,
                KEY_F11, KEY_F12, KEY_F13, KEY_F14, KEY_F15, KEY_F16, KEY_F17, KEY_F18, KEY_F19,
                KEY_F20,
            ]
            .get(n as usize)
            .copied()
        }
        _ => None,
    }
}

// ====== Key Name Mapping ======

/// Maps a key name string to its key code.
///
/// Returns None if the key name is not recognized.
pub fn key_name_to_code(name: &str) -> Option<u16> {
    let name_lower = name.to_lowercase();

    let code = match name_lower.as_str() {
        // Letters
        "a" => KEY_A,
        "b" => KEY_B,
        "c" => KEY_C,
        "d" => KEY_D,
        "e" => KEY_E,
        "f" => KEY_F,
        "g" => KEY_G,
        "h" => KEY_H,
        "i" => KEY_I,
        "j" => KEY_J,
        "k" => KEY_K,
        "l" => KEY_L,
        "m" => KEY_M,
        "n" => KEY_N,
        "o" => KEY_O,
        "p" => KEY_P,
        "q" => KEY_Q,
        "r" => KEY_R,
        "s" => KEY_S,
        "t" => KEY_T,
        "u" => KEY_U,
        "v" => KEY_V,
        "w" => KEY_W,
        "x" => KEY_X,
        "y" => KEY_Y,
        "z" => KEY_Z,

        // Numbers (top row)
        "1" => KEY_1,
        "2" => KEY_2,
        "3" => KEY_3,
        "4" => KEY_4,
        "5" => KEY_5,
        "6" => KEY_6,
        "7" => KEY_7,
        "8" => KEY_8,
        "9" => KEY_9,
        "0" => KEY_0,

        // Keypad
        "pad_0" => KEYPAD_0,
        "pad_1" => KEYPAD_1,
        "pad_2" => KEYPAD_2,
        "pad_3" => KEYPAD_3,
        "pad_4" => KEYPAD_4,
        "pad_5" => KEYPAD_5,
        "pad_6" => KEYPAD_6,
        "pad_7" => KEYPAD_7,
        "pad_8" => KEYPAD_8,
        "pad_9" => KEYPAD_9,
        "pad_decimal" => KEYPAD_DECIMAL,
        "pad_multiply" => KEYPAD_MULTIPLY,
        "pad_plus" => KEYPAD_PLUS,
        "pad_clear" => KEYPAD_CLEAR,
        "pad_divide" => KEYPAD_DIVIDE,
        "pad_enter" | "pad_return" => KEYPAD_ENTER,
        "pad_minus" => KEYPAD_MINUS,
        "pad_equal" | "pad_equals" => KEYPAD_EQUALS,

        // Function keys
        "f1" => KEY_F1,
        "f2" => KEY_F2,
        "f3" => KEY_F3,
        "f4" => KEY_F4,
        "f5" => KEY_F5,
        "f6" => KEY_F6,
        "f7" => KEY_F7,
        "f8" => KEY_F8,
        "f9" => KEY_F9,
        "f10" => KEY_F10,
        "f11" => KEY_F11,
        "f12" => KEY_F12,
        "f13" => KEY_F13,
        "f14" => KEY_F14,
        "f15" => KEY_F15,
        "f16" => KEY_F16,
        "f17" => KEY_F17,
        "f18" => KEY_F18,
        "f19" => KEY_F19,
        "f20" => KEY_F20,

        // Arrow keys
        "left" => KEY_LEFT,
        "right" => KEY_RIGHT,
        "up" => KEY_UP,
        "down" => KEY_DOWN,

        // Special keys
        "space" => KEY_SPACE,
        "return" | "enter" => KEY_RETURN,
        "tab" => KEY_TAB,
        "delete" | "backspace" => KEY_DELETE,
        "forward_delete" => KEY_FORWARD_DELETE,
        "escape" | "esc" => KEY_ESCAPE,
        "help" => KEY_HELP,
        "home" => KEY_HOME,
        "end" => KEY_END,
        "pageup" | "page_up" => KEY_PAGE_UP,
        "pagedown" | "page_down" => KEY_PAGE_DOWN,

        // Punctuation
        "minus" | "-" | "underscore" | "_" => KEY_MINUS,
        "equal" | "equals" | "=" | "plus" => KEY_EQUAL,
        "leftbracket" | "[" => KEY_LEFT_BRACKET,
        "rightbracket" | "]" => KEY_RIGHT_BRACKET,
        "backslash" | "\\" => KEY_BACKSLASH,
        "semicolon" | ";" => KEY_SEMICOLON,
        "quote" | "'" => KEY_QUOTE,
        "comma" | "," => KEY_COMMA,
        "period" | "." => KEY_PERIOD,
        "slash" | "/" => KEY_SLASH,
        "grave" | "`" => KEY_GRAVE,

        _ => return None,
    };

    Some(code)
}

/// Maps a key code back to a human-readable name.
pub fn key_code_to_name(code: u16) -> Option<&'static str> {
    match code {
        // Letters
        KEY_A => Some("a"),
        KEY_B => Some("b"),
        KEY_C => Some("c"),
        KEY_D => Some("d"),
        KEY_E => Some("e"),
        KEY_F => Some("f"),
        KEY_G => Some("g"),
        KEY_H => Some("h"),
        KEY_I => Some("i"),
        KEY_J => Some("j"),
        KEY_K => Some("k"),
        KEY_L => Some("l"),
        KEY_M => Some("m"),
        KEY_N => Some("n"),
        KEY_O => Some("o"),
        KEY_P => Some("p"),
        KEY_Q => Some("q"),
        KEY_R => Some("r"),
        KEY_S => Some("s"),
        KEY_T => Some("t"),
        KEY_U => Some("u"),
        KEY_V => Some("v"),
        KEY_W => Some("w"),
        KEY_X => Some("x"),
        KEY_Y => Some("y"),
        KEY_Z => Some("z"),

        // Numbers
        KEY_0 => Some("0"),
        KEY_1 => Some("1"),
        KEY_2 => Some("2"),
        KEY_3 => Some("3"),
        KEY_4 => Some("4"),
        KEY_5 => Some("5"),
        KEY_6 => Some("6"),
        KEY_7 => Some("7"),
        KEY_8 => Some("8"),
        KEY_9 => Some("9"),

        // Function keys
        KEY_F1 => Some("f1"),
        KEY_F2 => Some("f2"),
        KEY_F3 => Some("f3"),
        KEY_F4 => Some("f4"),
        KEY_F5 => Some("f5"),
        KEY_F6 => Some("f6"),
        KEY_F7 => Some("f7"),
        KEY_F8 => Some("f8"),
        KEY_F9 => Some("f9"),
        KEY_F10 => Some("f10"),
        KEY_F11 => Some("f11"),
        KEY_F12 => Some("f12"),
        KEY_F13 => Some("f13"),
        KEY_F14 => Some("f14"),
        KEY_F15 => Some("f15"),
        KEY_F16 => Some("f16"),
        KEY_F17 => Some("f17"),
        KEY_F18 => Some("f18"),
        KEY_F19 => Some("f19"),
        KEY_F20 => Some("f20"),

        // Special keys
        KEY_SPACE => Some("space"),
        KEY_RETURN => Some("return"),
        KEY_TAB => Some("tab"),
        KEY_DELETE => Some("delete"),
        KEY_FORWARD_DELETE => Some("forward_delete"),
        KEY_ESCAPE => Some("esc"),
        KEY_HELP => Some("help"),
        KEY_LEFT => Some("left"),
        KEY_RIGHT => Some("right"),
        KEY_UP => Some("up"),
        KEY_DOWN => Some("down"),
        KEY_HOME => Some("home"),
        KEY_END => Some("end"),
        KEY_PAGE_UP => Some("pageup"),
        KEY_PAGE_DOWN => Some("pagedown"),

        // Punctuation
        KEY_MINUS => Some("-"),
        KEY_EQUAL => Some("="),
        KEY_LEFT_BRACKET => Some("["),
        KEY_RIGHT_BRACKET => Some("]"),
        KEY_BACKSLASH => Some("\\"),
        KEY_SEMICOLON => Some(";"),
        KEY_QUOTE => Some("'"),
        KEY_COMMA => Some(","),
        KEY_PERIOD => Some("."),
        KEY_SLASH => Some("/"),
        KEY_GRAVE => Some("`"),

        _ => None,
    }
}
