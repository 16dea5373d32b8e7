//! Drawable glyphs for keys that do not type a printable character.

use serde::{Deserialize, Serialize};

use crate::key_code::KeyCode;

/// Keys rendered with a fixed glyph instead of a layout character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyClass {
    TabRight,
    TabLeft,
    Return,
    ReturnR2L,
    DeleteLeft,
    DeleteRight,
    PadClear,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageDown,
    PageUp,
    NorthwestArrow,
    SoutheastArrow,
    Escape,
    Space,
}

impl KeyClass {
    pub const ALL: [KeyClass; 17] = [
        KeyClass::TabRight,
        KeyClass::TabLeft,
        KeyClass::Return,
        KeyClass::ReturnR2L,
        KeyClass::DeleteLeft,
        KeyClass::DeleteRight,
        KeyClass::PadClear,
        KeyClass::LeftArrow,
        KeyClass::RightArrow,
        KeyClass::UpArrow,
        KeyClass::DownArrow,
        KeyClass::PageDown,
        KeyClass::PageUp,
        KeyClass::NorthwestArrow,
        KeyClass::SoutheastArrow,
        KeyClass::Escape,
        KeyClass::Space,
    ];

    /// The class a key code belongs to, if any.
    ///
    /// `TabLeft` has no key of its own and is never returned here.
    pub fn from_key_code(key_code: KeyCode) -> Option<KeyClass> {
        let class = match key_code {
            KeyCode::TAB => KeyClass::TabRight,
            KeyCode::KEYPAD_ENTER => KeyClass::Return,
            KeyCode::RETURN => KeyClass::ReturnR2L,
            KeyCode::DELETE => KeyClass::DeleteLeft,
            KeyCode::FORWARD_DELETE => KeyClass::DeleteRight,
            KeyCode::KEYPAD_CLEAR => KeyClass::PadClear,
            KeyCode::LEFT_ARROW => KeyClass::LeftArrow,
            KeyCode::RIGHT_ARROW => KeyClass::RightArrow,
            KeyCode::UP_ARROW => KeyClass::UpArrow,
            KeyCode::DOWN_ARROW => KeyClass::DownArrow,
            KeyCode::PAGE_DOWN => KeyClass::PageDown,
            KeyCode::PAGE_UP => KeyClass::PageUp,
            KeyCode::HOME => KeyClass::NorthwestArrow,
            KeyCode::END => KeyClass::SoutheastArrow,
            KeyCode::ESCAPE => KeyClass::Escape,
            KeyCode::SPACE => KeyClass::Space,
            _ => return None,
        };
        Some(class)
    }

    pub fn glyph(self) -> char {
        match self {
            KeyClass::TabRight => '\u{21E5}',       // ⇥
            KeyClass::TabLeft => '\u{21E4}',        // ⇤
            KeyClass::Return => '\u{2305}',         // ⌅
            KeyClass::ReturnR2L => '\u{21A9}',      // ↩
            KeyClass::DeleteLeft => '\u{232B}',     // ⌫
            KeyClass::DeleteRight => '\u{2326}',    // ⌦
            KeyClass::PadClear => '\u{2327}',       // ⌧
            KeyClass::LeftArrow => '\u{2190}',      // ←
            KeyClass::RightArrow => '\u{2192}',     // →
            KeyClass::UpArrow => '\u{2191}',        // ↑
            KeyClass::DownArrow => '\u{2193}',      // ↓
            KeyClass::PageDown => '\u{21DF}',       // ⇟
            KeyClass::PageUp => '\u{21DE}',         // ⇞
            KeyClass::NorthwestArrow => '\u{2196}', // ↖
            KeyClass::SoutheastArrow => '\u{2198}', // ↘
            KeyClass::Escape => '\u{238B}',         // ⎋
            KeyClass::Space => ' ',
        }
    }

    /// English key name, also the lookup key for localized names.
    pub fn name(self) -> &'static str {
        match self {
            KeyClass::TabRight => "Tab",
            KeyClass::TabLeft => "Backtab",
            KeyClass::Return => "Enter",
            KeyClass::ReturnR2L => "Return",
            KeyClass::DeleteLeft => "Delete",
            KeyClass::DeleteRight => "Forward Delete",
            KeyClass::PadClear => "Clear",
            KeyClass::LeftArrow => "Left Arrow",
            KeyClass::RightArrow => "Right Arrow",
            KeyClass::UpArrow => "Up Arrow",
            KeyClass::DownArrow => "Down Arrow",
            KeyClass::PageDown => "Page Down",
            KeyClass::PageUp => "Page Up",
            KeyClass::NorthwestArrow => "Home",
            KeyClass::SoutheastArrow => "End",
            KeyClass::Escape => "Escape",
            KeyClass::Space => "Space",
        }
    }
}

/// Glyph for a key code, or `None` when the layout character should be used.
pub fn glyph_for(key_code: KeyCode) -> Option<char> {
    KeyClass::from_key_code(key_code).map(KeyClass::glyph)
}
