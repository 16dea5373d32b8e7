//! Keyboard layout queries.
//!
//! Layout data is a system resource, so the engine only talks to it through
//! [`KeyboardLayoutProvider`]. [`StaticLayoutProvider`] is a table-driven
//! implementation with a few built-in layouts.

mod builtin;
mod static_provider;

#[cfg(test)]
mod tests;

pub use builtin::{french_layout, german_layout, us_layout, FRENCH, GERMAN, US};
pub use static_provider::{KeyboardLayout, StaticLayoutProvider};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::key_code::KeyCode;

/// Identifier of a keyboard input source, e.g. `com.apple.keylayout.US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSourceId(String);

impl InputSourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InputSourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for InputSourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for InputSourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Characters a key types with and without Shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCharacters {
    pub unshifted: Option<char>,
    pub shifted: Option<char>,
}

/// Access to the system's keyboard layouts.
pub trait KeyboardLayoutProvider {
    /// The input source currently selected by the user.
    fn current_input_source(&self) -> InputSourceId;

    /// An input source able to type ASCII.
    fn ascii_capable_input_source(&self) -> InputSourceId;

    /// What a key types under a given input source.
    fn characters(&self, key_code: KeyCode, source: &InputSourceId) -> Option<KeyCharacters>;

    /// Every key that types `character` under `source`, shifted or not.
    fn key_codes_for(&self, character: char, source: &InputSourceId) -> Vec<KeyCode>;

    /// Whether `source` is an input source this provider has layout data for.
    fn has_input_source(&self, source: &InputSourceId) -> bool;
}

/// A key plus whether Shift must be held to type the wanted character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    pub key_code: KeyCode,
    pub requires_shift: bool,
}

/// Find the stroke that types `character` under `source`.
///
/// An unshifted stroke wins over a shifted one.
pub fn stroke_for<L>(layout: &L, character: char, source: &InputSourceId) -> Option<KeyStroke>
where
    L: KeyboardLayoutProvider + ?Sized,
{
    let candidates = layout.key_codes_for(character, source);

    let unshifted = candidates.iter().copied().find(|code| {
        layout
            .characters(*code, source)
            .is_some_and(|chars| chars.unshifted == Some(character))
    });

    match unshifted {
        Some(key_code) => Some(KeyStroke {
            key_code,
            requires_shift: false,
        }),
        None => candidates.first().map(|key_code| KeyStroke {
            key_code: *key_code,
            requires_shift: true,
        }),
    }
}

/// The unshifted character a key types under `source`.
pub fn unshifted_character<L>(layout: &L, key_code: KeyCode, source: &InputSourceId) -> Option<char>
where
    L: KeyboardLayoutProvider + ?Sized,
{
    layout
        .characters(key_code, source)
        .and_then(|chars| chars.unshifted)
}
