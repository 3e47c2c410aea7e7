//! Key classification by virtual key code.
//!
//! Two independent predicates:
//! - `is_extended`: the key sits in the extended block of the keyboard
//!   (arrows, navigation cluster, right-hand modifiers, Win keys). Its input
//!   event must carry `KEYEVENTF_EXTENDEDKEY`, otherwise the driver reports
//!   the numeric-keypad key that shares the same VK.
//! - `is_media_or_browser`: dedicated volume, media transport, or browser
//!   navigation key. Also injected with the extended flag.

use super::codes::*;
use super::VirtualKeyCode;

/// Derived key category. Never stored; computed from the code on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Normal,
    Extended,
    /// Takes precedence over `Extended` when both predicates hold.
    MediaOrBrowser,
}

/// Returns true when events for `vk` need `KEYEVENTF_EXTENDEDKEY`.
pub fn is_extended(vk: VirtualKeyCode) -> bool {
    matches!(
        vk,
        VK_LEFT
            | VK_UP
            | VK_RIGHT
            | VK_DOWN
            | VK_HOME
            | VK_END
            | VK_PRIOR
            | VK_NEXT
            | VK_INSERT
            | VK_DELETE
            | VK_RMENU
            | VK_RCONTROL
            | VK_LWIN
            | VK_RWIN
            | VK_APPS
            | VK_NUMLOCK
            | VK_DIVIDE
            | VK_SNAPSHOT
    )
}

/// Returns true for volume, media transport, and browser navigation keys.
pub fn is_media_or_browser(vk: VirtualKeyCode) -> bool {
    (VK_BROWSER_BACK..=VK_MEDIA_PLAY_PAUSE).contains(&vk)
}

pub fn classify(vk: VirtualKeyCode) -> KeyClass {
    if is_media_or_browser(vk) {
        KeyClass::MediaOrBrowser
    } else if is_extended(vk) {
        KeyClass::Extended
    } else {
        KeyClass::Normal
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::table::lookup;

    #[test]
    fn navigation_cluster_is_extended() {
        for name in [
            "LEFT", "RIGHT", "UP", "DOWN", "HOME", "END", "INSERT", "DELETE", "PAGEUP",
            "PAGEDOWN", "LWIN", "RWIN",
        ] {
            let vk = lookup(name).expect("expected a mapping");
            assert!(is_extended(vk), "{name} should be extended");
            assert_eq!(classify(vk), KeyClass::Extended, "{name}");
        }
    }

    #[test]
    fn right_hand_modifiers_are_extended_left_are_not() {
        assert!(is_extended(VK_RCONTROL));
        assert!(is_extended(VK_RMENU));
        assert!(!is_extended(VK_LCONTROL));
        assert!(!is_extended(VK_LMENU));
        assert!(!is_extended(VK_CONTROL));
    }

    #[test]
    fn letters_and_digits_are_normal() {
        for name in ["A", "Q", "Z", "0", "5", "F5", "ENTER", "SPACE", "SHIFT"] {
            let vk = lookup(name).expect("expected a mapping");
            assert_eq!(classify(vk), KeyClass::Normal, "{name}");
        }
    }

    #[test]
    fn media_and_browser_keys_classify_as_media() {
        for name in [
            "VOLUMEMUTE",
            "VOLUMEDOWN",
            "VOLUMEUP",
            "MEDIANEXT",
            "MEDIAPREV",
            "MEDIASTOP",
            "MEDIAPLAYPAUSE",
            "BROWSERBACK",
            "BROWSERFORWARD",
            "BROWSERHOME",
        ] {
            let vk = lookup(name).expect("expected a mapping");
            assert!(is_media_or_browser(vk), "{name}");
            assert_eq!(classify(vk), KeyClass::MediaOrBrowser, "{name}");
        }
    }

    #[test]
    fn range_bounds_are_exact() {
        assert!(!is_media_or_browser(VK_RMENU));
        assert!(!is_media_or_browser(0xB4));
    }
}
