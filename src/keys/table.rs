//! Key symbol table: canonical key names -> Windows virtual key codes.
//!
//! Names are uppercase ASCII. `lookup` is case-sensitive on that form;
//! callers run input through `normalize_symbol` first. Several names may
//! share a code (`CTRL` and `CONTROL`, `ESC` and `ESCAPE`), so the table is
//! not invertible.
//!
//! Modifiers without a side (`SHIFT`, `CONTROL`, `ALT`) inject the generic
//! VK so the OS picks the left-hand scan code; the sided names are available
//! when a caller needs the right-hand key specifically.

use super::codes::*;
use super::VirtualKeyCode;

/// Every canonical symbol and its virtual key code, in display order.
pub const KEY_TABLE: &[(&str, VirtualKeyCode)] = &[
    // Letters (VK_A = 0x41 .. VK_Z = 0x5A, same as ASCII uppercase)
    ("A", 0x41),
    ("B", 0x42),
    ("C", 0x43),
    ("D", 0x44),
    ("E", 0x45),
    ("F", 0x46),
    ("G", 0x47),
    ("H", 0x48),
    ("I", 0x49),
    ("J", 0x4A),
    ("K", 0x4B),
    ("L", 0x4C),
    ("M", 0x4D),
    ("N", 0x4E),
    ("O", 0x4F),
    ("P", 0x50),
    ("Q", 0x51),
    ("R", 0x52),
    ("S", 0x53),
    ("T", 0x54),
    ("U", 0x55),
    ("V", 0x56),
    ("W", 0x57),
    ("X", 0x58),
    ("Y", 0x59),
    ("Z", 0x5A),
    // Top-row digits (VK_0 = 0x30 .. VK_9 = 0x39, same as ASCII)
    ("0", 0x30),
    ("1", 0x31),
    ("2", 0x32),
    ("3", 0x33),
    ("4", 0x34),
    ("5", 0x35),
    ("6", 0x36),
    ("7", 0x37),
    ("8", 0x38),
    ("9", 0x39),
    // Function keys
    ("F1", VK_F1),
    ("F2", VK_F1 + 1),
    ("F3", VK_F1 + 2),
    ("F4", VK_F1 + 3),
    ("F5", VK_F1 + 4),
    ("F6", VK_F1 + 5),
    ("F7", VK_F1 + 6),
    ("F8", VK_F1 + 7),
    ("F9", VK_F1 + 8),
    ("F10", VK_F1 + 9),
    ("F11", VK_F1 + 10),
    ("F12", VK_F1 + 11),
    ("F13", VK_F1 + 12),
    ("F14", VK_F1 + 13),
    ("F15", VK_F1 + 14),
    ("F16", VK_F1 + 15),
    ("F17", VK_F1 + 16),
    ("F18", VK_F1 + 17),
    ("F19", VK_F1 + 18),
    ("F20", VK_F1 + 19),
    ("F21", VK_F1 + 20),
    ("F22", VK_F1 + 21),
    ("F23", VK_F1 + 22),
    ("F24", VK_F1 + 23),
    // Editing and whitespace
    ("ENTER", VK_RETURN),
    ("RETURN", VK_RETURN),
    ("ESCAPE", VK_ESCAPE),
    ("ESC", VK_ESCAPE),
    ("BACKSPACE", VK_BACK),
    ("TAB", VK_TAB),
    ("SPACE", VK_SPACE),
    // Modifiers
    ("SHIFT", VK_SHIFT),
    ("CONTROL", VK_CONTROL),
    ("CTRL", VK_CONTROL),
    ("ALT", VK_MENU),
    ("MENU", VK_MENU),
    ("LSHIFT", VK_LSHIFT),
    ("RSHIFT", VK_RSHIFT),
    ("LCONTROL", VK_LCONTROL),
    ("LCTRL", VK_LCONTROL),
    ("RCONTROL", VK_RCONTROL),
    ("RCTRL", VK_RCONTROL),
    ("LALT", VK_LMENU),
    ("RALT", VK_RMENU),
    ("LWIN", VK_LWIN),
    ("WIN", VK_LWIN),
    ("RWIN", VK_RWIN),
    ("APPS", VK_APPS),
    // Navigation
    ("LEFT", VK_LEFT),
    ("UP", VK_UP),
    ("RIGHT", VK_RIGHT),
    ("DOWN", VK_DOWN),
    ("HOME", VK_HOME),
    ("END", VK_END),
    ("PAGEUP", VK_PRIOR),
    ("PAGEDOWN", VK_NEXT),
    ("INSERT", VK_INSERT),
    ("DELETE", VK_DELETE),
    // Lock and system keys
    ("CAPSLOCK", VK_CAPITAL),
    ("NUMLOCK", VK_NUMLOCK),
    ("SCROLLLOCK", VK_SCROLL),
    ("PRINTSCREEN", VK_SNAPSHOT),
    ("PAUSE", VK_PAUSE),
    // Numeric keypad
    ("NUMPAD0", VK_NUMPAD0),
    ("NUMPAD1", VK_NUMPAD0 + 1),
    ("NUMPAD2", VK_NUMPAD0 + 2),
    ("NUMPAD3", VK_NUMPAD0 + 3),
    ("NUMPAD4", VK_NUMPAD0 + 4),
    ("NUMPAD5", VK_NUMPAD0 + 5),
    ("NUMPAD6", VK_NUMPAD0 + 6),
    ("NUMPAD7", VK_NUMPAD0 + 7),
    ("NUMPAD8", VK_NUMPAD0 + 8),
    ("NUMPAD9", VK_NUMPAD0 + 9),
    ("MULTIPLY", VK_MULTIPLY),
    ("ADD", VK_ADD),
    ("SUBTRACT", VK_SUBTRACT),
    ("DECIMAL", VK_DECIMAL),
    ("DIVIDE", VK_DIVIDE),
    // Punctuation
    ("SEMICOLON", VK_OEM_1),
    ("EQUAL", VK_OEM_PLUS),
    ("PLUS", VK_OEM_PLUS),
    ("COMMA", VK_OEM_COMMA),
    ("MINUS", VK_OEM_MINUS),
    ("PERIOD", VK_OEM_PERIOD),
    ("SLASH", VK_OEM_2),
    ("BACKTICK", VK_OEM_3),
    ("LBRACKET", VK_OEM_4),
    ("BACKSLASH", VK_OEM_5),
    ("RBRACKET", VK_OEM_6),
    ("QUOTE", VK_OEM_7),
    // Volume and media transport
    ("VOLUMEMUTE", VK_VOLUME_MUTE),
    ("VOLUMEDOWN", VK_VOLUME_DOWN),
    ("VOLUMEUP", VK_VOLUME_UP),
    ("MEDIANEXT", VK_MEDIA_NEXT_TRACK),
    ("MEDIAPREV", VK_MEDIA_PREV_TRACK),
    ("MEDIASTOP", VK_MEDIA_STOP),
    ("MEDIAPLAYPAUSE", VK_MEDIA_PLAY_PAUSE),
    // Browser navigation
    ("BROWSERBACK", VK_BROWSER_BACK),
    ("BROWSERFORWARD", VK_BROWSER_FORWARD),
    ("BROWSERREFRESH", VK_BROWSER_REFRESH),
    ("BROWSERSTOP", VK_BROWSER_STOP),
    ("BROWSERSEARCH", VK_BROWSER_SEARCH),
    ("BROWSERFAVORITES", VK_BROWSER_FAVORITES),
    ("BROWSERHOME", VK_BROWSER_HOME),
];

/// Resolves a canonical (uppercase) key name to its virtual key code.
///
/// Returns `None` for names not in the table. Lowercase input is not
/// resolved; run it through `normalize_symbol` first.
pub fn lookup(symbol: &str) -> Option<VirtualKeyCode> {
    KEY_TABLE
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|&(_, vk)| vk)
}

/// Trims surrounding whitespace and uppercases ASCII letters.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Lists every canonical symbol in table order.
pub fn symbols() -> Vec<&'static str> {
    KEY_TABLE.iter().map(|&(name, _)| name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn spot_check_letters_and_digits() {
        assert_eq!(lookup("A"), Some(0x41));
        assert_eq!(lookup("Z"), Some(0x5A));
        assert_eq!(lookup("0"), Some(0x30));
        assert_eq!(lookup("9"), Some(0x39));
    }

    #[test]
    fn spot_check_function_keys() {
        assert_eq!(lookup("F1"), Some(0x70));
        assert_eq!(lookup("F12"), Some(0x7B));
        assert_eq!(lookup("F24"), Some(0x87));
    }

    #[test]
    fn aliases_share_a_code() {
        assert_eq!(lookup("CTRL"), lookup("CONTROL"));
        assert_eq!(lookup("ESC"), lookup("ESCAPE"));
        assert_eq!(lookup("CONTROL"), Some(VK_CONTROL));
    }

    #[test]
    fn media_keys_resolve() {
        assert_eq!(lookup("VOLUMEUP"), Some(0xAF));
        assert_eq!(lookup("MEDIAPLAYPAUSE"), Some(0xB3));
        assert_eq!(lookup("BROWSERBACK"), Some(0xA6));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("ctrl"), None);
        assert_eq!(lookup(&normalize_symbol(" ctrl ")), Some(VK_CONTROL));
    }

    #[test]
    fn unknown_symbol_returns_none() {
        assert_eq!(lookup("FOO"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        let first = lookup("PAGEDOWN");
        for _ in 0..100 {
            assert_eq!(lookup("PAGEDOWN"), first);
        }
    }

    #[test]
    fn names_are_unique_and_canonical() {
        let mut seen = HashSet::new();
        for name in symbols() {
            assert!(seen.insert(name), "duplicate symbol {name}");
            assert_eq!(name, normalize_symbol(name), "{name} is not canonical");
        }
    }
}
