use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::modifier_glyphs;
use crate::flags::{to_modern, ModifierFlags};
use crate::key_code::KeyCode;

/// A recorded keyboard shortcut: one key plus modifiers.
///
/// Equality and hashing cover exactly the key code and modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    key_code: KeyCode,
    modifier_flags: ModifierFlags,
}

impl Shortcut {
    pub fn new(key_code: KeyCode, modifier_flags: ModifierFlags) -> Self {
        Self {
            key_code,
            modifier_flags,
        }
    }

    /// Build from flags in the legacy bit layout.
    pub fn from_legacy(key_code: KeyCode, legacy_flags: u32) -> Self {
        Self::new(key_code, to_modern(legacy_flags))
    }

    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    pub fn modifier_flags(&self) -> ModifierFlags {
        self.modifier_flags
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", modifier_glyphs(self.modifier_flags), self.key_code)
    }
}
