//! Implicit-Shift correction settings for symbolic modifier flags.

use serde::{Deserialize, Serialize};

/// Which rule decides that a symbolic stroke needs an implicit Shift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCorrectionRule {
    /// Ask the keyboard layout whether the character sits behind Shift.
    #[default]
    Layout,
    /// Treat a fixed list of key codes as shifted.
    KeyCodes,
    /// Never add Shift.
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftCorrectionConfig {
    pub rule: ShiftCorrectionRule,
    /// Virtual key codes (0-127) used by the `key_codes` rule.
    pub key_codes: Vec<u16>,
}
