//! Windows virtual-key codes used by the symbol table and the classifier.
//!
//! Values are from the Windows SDK (winuser.h). They are duplicated here
//! rather than imported from `windows-sys` so the synthesis logic builds and
//! tests on every target.

use super::VirtualKeyCode;

pub const VK_BACK: VirtualKeyCode = 0x08;
pub const VK_TAB: VirtualKeyCode = 0x09;
pub const VK_RETURN: VirtualKeyCode = 0x0D;
pub const VK_SHIFT: VirtualKeyCode = 0x10;
pub const VK_CONTROL: VirtualKeyCode = 0x11;
pub const VK_MENU: VirtualKeyCode = 0x12;
pub const VK_PAUSE: VirtualKeyCode = 0x13;
pub const VK_CAPITAL: VirtualKeyCode = 0x14;
pub const VK_ESCAPE: VirtualKeyCode = 0x1B;
pub const VK_SPACE: VirtualKeyCode = 0x20;
pub const VK_PRIOR: VirtualKeyCode = 0x21;
pub const VK_NEXT: VirtualKeyCode = 0x22;
pub const VK_END: VirtualKeyCode = 0x23;
pub const VK_HOME: VirtualKeyCode = 0x24;
pub const VK_LEFT: VirtualKeyCode = 0x25;
pub const VK_UP: VirtualKeyCode = 0x26;
pub const VK_RIGHT: VirtualKeyCode = 0x27;
pub const VK_DOWN: VirtualKeyCode = 0x28;
pub const VK_SNAPSHOT: VirtualKeyCode = 0x2C;
pub const VK_INSERT: VirtualKeyCode = 0x2D;
pub const VK_DELETE: VirtualKeyCode = 0x2E;
pub const VK_LWIN: VirtualKeyCode = 0x5B;
pub const VK_RWIN: VirtualKeyCode = 0x5C;
pub const VK_APPS: VirtualKeyCode = 0x5D;
pub const VK_NUMPAD0: VirtualKeyCode = 0x60;
pub const VK_MULTIPLY: VirtualKeyCode = 0x6A;
pub const VK_ADD: VirtualKeyCode = 0x6B;
pub const VK_SUBTRACT: VirtualKeyCode = 0x6D;
pub const VK_DECIMAL: VirtualKeyCode = 0x6E;
pub const VK_DIVIDE: VirtualKeyCode = 0x6F;
pub const VK_F1: VirtualKeyCode = 0x70;
pub const VK_NUMLOCK: VirtualKeyCode = 0x90;
pub const VK_SCROLL: VirtualKeyCode = 0x91;
pub const VK_LSHIFT: VirtualKeyCode = 0xA0;
pub const VK_RSHIFT: VirtualKeyCode = 0xA1;
pub const VK_LCONTROL: VirtualKeyCode = 0xA2;
pub const VK_RCONTROL: VirtualKeyCode = 0xA3;
pub const VK_LMENU: VirtualKeyCode = 0xA4;
pub const VK_RMENU: VirtualKeyCode = 0xA5;

// Browser keys
pub const VK_BROWSER_BACK: VirtualKeyCode = 0xA6;
pub const VK_BROWSER_FORWARD: VirtualKeyCode = 0xA7;
pub const VK_BROWSER_REFRESH: VirtualKeyCode = 0xA8;
pub const VK_BROWSER_STOP: VirtualKeyCode = 0xA9;
pub const VK_BROWSER_SEARCH: VirtualKeyCode = 0xAA;
pub const VK_BROWSER_FAVORITES: VirtualKeyCode = 0xAB;
pub const VK_BROWSER_HOME: VirtualKeyCode = 0xAC;

// Volume and media transport keys
pub const VK_VOLUME_MUTE: VirtualKeyCode = 0xAD;
pub const VK_VOLUME_DOWN: VirtualKeyCode = 0xAE;
pub const VK_VOLUME_UP: VirtualKeyCode = 0xAF;
pub const VK_MEDIA_NEXT_TRACK: VirtualKeyCode = 0xB0;
pub const VK_MEDIA_PREV_TRACK: VirtualKeyCode = 0xB1;
pub const VK_MEDIA_STOP: VirtualKeyCode = 0xB2;
pub const VK_MEDIA_PLAY_PAUSE: VirtualKeyCode = 0xB3;

// OEM punctuation (ANSI layout assumed)
pub const VK_OEM_1: VirtualKeyCode = 0xBA;
pub const VK_OEM_PLUS: VirtualKeyCode = 0xBB;
pub const VK_OEM_COMMA: VirtualKeyCode = 0xBC;
pub const VK_OEM_MINUS: VirtualKeyCode = 0xBD;
pub const VK_OEM_PERIOD: VirtualKeyCode = 0xBE;
pub const VK_OEM_2: VirtualKeyCode = 0xBF;
pub const VK_OEM_3: VirtualKeyCode = 0xC0;
pub const VK_OEM_4: VirtualKeyCode = 0xDB;
pub const VK_OEM_5: VirtualKeyCode = 0xDC;
pub const VK_OEM_6: VirtualKeyCode = 0xDD;
pub const VK_OEM_7: VirtualKeyCode = 0xDE;
