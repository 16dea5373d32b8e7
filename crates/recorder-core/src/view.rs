//! The derived, read-only projection of a shortcut.

use serde::{Deserialize, Serialize};

use crate::flags::ModifierFlags;
use crate::key_code::KeyCode;
use crate::layout::InputSourceId;

/// Derived fields exposed for binding and observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionKey {
    KeyEquivalent,
    KeyEquivalentModifierMask,
    LiteralKeyCode,
    SymbolicKeyCode,
    LiteralAsciiKeyCode,
    SymbolicAsciiKeyCode,
    LiteralModifierFlags,
    SymbolicModifierFlags,
}

impl SelectionKey {
    pub const ALL: [SelectionKey; 8] = [
        SelectionKey::KeyEquivalent,
        SelectionKey::KeyEquivalentModifierMask,
        SelectionKey::LiteralKeyCode,
        SelectionKey::SymbolicKeyCode,
        SelectionKey::LiteralAsciiKeyCode,
        SelectionKey::SymbolicAsciiKeyCode,
        SelectionKey::LiteralModifierFlags,
        SelectionKey::SymbolicModifierFlags,
    ];
}

/// Typed value of one [`SelectionKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    Text(String),
    ModifierMask(ModifierFlags),
    KeyCode(KeyCode),
    LegacyFlags(u32),
}

/// All representations of one shortcut under one input source.
///
/// Built in a single pass by [`derive_view`](crate::derive::derive_view);
/// every field belongs to the same pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedShortcutView {
    pub(crate) input_source: InputSourceId,
    pub(crate) key_equivalent: String,
    pub(crate) key_equivalent_modifier_mask: ModifierFlags,
    pub(crate) literal_key_code: KeyCode,
    pub(crate) symbolic_key_code: KeyCode,
    pub(crate) literal_ascii_key_code: KeyCode,
    pub(crate) symbolic_ascii_key_code: KeyCode,
    pub(crate) literal_modifier_flags: u32,
    pub(crate) symbolic_modifier_flags: u32,
    pub(crate) display_string: String,
}

impl DerivedShortcutView {
    /// Input source the view was derived against.
    pub fn input_source(&self) -> &InputSourceId {
        &self.input_source
    }

    /// Character (or glyph) a menu item would use, without modifiers.
    pub fn key_equivalent(&self) -> &str {
        &self.key_equivalent
    }

    pub fn key_equivalent_modifier_mask(&self) -> ModifierFlags {
        self.key_equivalent_modifier_mask
    }

    pub fn literal_key_code(&self) -> KeyCode {
        self.literal_key_code
    }

    pub fn symbolic_key_code(&self) -> KeyCode {
        self.symbolic_key_code
    }

    pub fn literal_ascii_key_code(&self) -> KeyCode {
        self.literal_ascii_key_code
    }

    pub fn symbolic_ascii_key_code(&self) -> KeyCode {
        self.symbolic_ascii_key_code
    }

    /// Legacy-encoded recorded flags.
    pub fn literal_modifier_flags(&self) -> u32 {
        self.literal_modifier_flags
    }

    /// Legacy-encoded flags including any implicit Shift.
    pub fn symbolic_modifier_flags(&self) -> u32 {
        self.symbolic_modifier_flags
    }

    /// Modifier glyphs followed by the key, e.g. `⇧⌘⇥`.
    pub fn display_string(&self) -> &str {
        &self.display_string
    }

    pub fn get(&self, key: SelectionKey) -> SelectionValue {
        match key {
            SelectionKey::KeyEquivalent => SelectionValue::Text(self.key_equivalent.clone()),
            SelectionKey::KeyEquivalentModifierMask => {
                SelectionValue::ModifierMask(self.key_equivalent_modifier_mask)
            }
            SelectionKey::LiteralKeyCode => SelectionValue::KeyCode(self.literal_key_code),
            SelectionKey::SymbolicKeyCode => SelectionValue::KeyCode(self.symbolic_key_code),
            SelectionKey::LiteralAsciiKeyCode => {
                SelectionValue::KeyCode(self.literal_ascii_key_code)
            }
            SelectionKey::SymbolicAsciiKeyCode => {
                SelectionValue::KeyCode(self.symbolic_ascii_key_code)
            }
            SelectionKey::LiteralModifierFlags => {
                SelectionValue::LegacyFlags(self.literal_modifier_flags)
            }
            SelectionKey::SymbolicModifierFlags => {
                SelectionValue::LegacyFlags(self.symbolic_modifier_flags)
            }
        }
    }

    /// Keys whose value differs between `self` and `other`.
    pub fn changed_keys(&self, other: &DerivedShortcutView) -> Vec<SelectionKey> {
        SelectionKey::ALL
            .into_iter()
            .filter(|key| self.get(*key) != other.get(*key))
            .collect()
    }
}
