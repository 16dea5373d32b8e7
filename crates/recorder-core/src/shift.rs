//! Rules deciding whether a symbolic stroke carries an implicit Shift.
//!
//! A shortcut recorded as ⌘1 on a US layout is typed as ⌘⇧& on AZERTY, where
//! the digits live behind Shift. Whether that Shift belongs in the symbolic
//! modifier flags depends on layout data, so the rule is pluggable.

use std::collections::BTreeSet;

use recorder_config::schema::{ShiftCorrectionConfig, ShiftCorrectionRule};

use crate::flags::ModifierFlags;
use crate::key_code::KeyCode;
use crate::layout::{InputSourceId, KeyStroke};

/// What a rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct ShiftContext<'a> {
    /// The character the shortcut was recorded with.
    pub character: char,
    /// How that character is typed on the current input source.
    pub stroke: KeyStroke,
    pub recorded_flags: ModifierFlags,
    pub input_source: &'a InputSourceId,
}

pub trait ShiftCorrection {
    /// Consulted only when the recorded flags do not already hold Shift.
    fn requires_implicit_shift(&self, ctx: &ShiftContext<'_>) -> bool;
}

impl<F> ShiftCorrection for F
where
    F: Fn(&ShiftContext<'_>) -> bool,
{
    fn requires_implicit_shift(&self, ctx: &ShiftContext<'_>) -> bool {
        self(ctx)
    }
}

/// Shift is implied when the layout only types the character shifted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutShiftRule;

impl ShiftCorrection for LayoutShiftRule {
    fn requires_implicit_shift(&self, ctx: &ShiftContext<'_>) -> bool {
        ctx.stroke.requires_shift
    }
}

/// Shift is implied for a fixed set of symbolic key codes.
#[derive(Debug, Clone, Default)]
pub struct KeyCodeShiftRule {
    key_codes: BTreeSet<KeyCode>,
}

impl KeyCodeShiftRule {
    pub fn new(key_codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            key_codes: key_codes.into_iter().collect(),
        }
    }
}

impl ShiftCorrection for KeyCodeShiftRule {
    fn requires_implicit_shift(&self, ctx: &ShiftContext<'_>) -> bool {
        self.key_codes.contains(&ctx.stroke.key_code)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoShiftCorrection;

impl ShiftCorrection for NoShiftCorrection {
    fn requires_implicit_shift(&self, _ctx: &ShiftContext<'_>) -> bool {
        false
    }
}

/// Build the rule selected in `[shift_correction]`.
pub fn from_config(config: &ShiftCorrectionConfig) -> Box<dyn ShiftCorrection> {
    match config.rule {
        ShiftCorrectionRule::Layout => Box::new(LayoutShiftRule),
        ShiftCorrectionRule::KeyCodes => Box::new(KeyCodeShiftRule::new(
            config.key_codes.iter().copied().map(KeyCode),
        )),
        ShiftCorrectionRule::Disabled => Box::new(NoShiftCorrection),
    }
}
