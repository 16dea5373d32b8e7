use serde::{Deserialize, Serialize};
use std::fmt;

/// A platform virtual key code.
///
/// Identifies a physical key. Which character it types depends on the
/// active input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const RETURN: KeyCode = KeyCode(0x24);
    pub const TAB: KeyCode = KeyCode(0x30);
    pub const SPACE: KeyCode = KeyCode(0x31);
    pub const DELETE: KeyCode = KeyCode(0x33);
    pub const ESCAPE: KeyCode = KeyCode(0x35);
    pub const KEYPAD_CLEAR: KeyCode = KeyCode(0x47);
    pub const KEYPAD_ENTER: KeyCode = KeyCode(0x4C);
    pub const HOME: KeyCode = KeyCode(0x73);
    pub const PAGE_UP: KeyCode = KeyCode(0x74);
    pub const FORWARD_DELETE: KeyCode = KeyCode(0x75);
    pub const END: KeyCode = KeyCode(0x77);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x79);
    pub const LEFT_ARROW: KeyCode = KeyCode(0x7B);
    pub const RIGHT_ARROW: KeyCode = KeyCode(0x7C);
    pub const DOWN_ARROW: KeyCode = KeyCode(0x7D);
    pub const UP_ARROW: KeyCode = KeyCode(0x7E);

    pub fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for KeyCode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
