use recorder_common::PlatformError;
use recorder_config::RecorderConfig;

use crate::layout::{InputSourceId, KeyboardLayoutProvider};
use crate::shift::{self, LayoutShiftRule, ShiftCorrection};

/// Settings the controller applies on every recompute.
pub struct ControllerOptions {
    /// Overrides the provider's ASCII-capable input source.
    pub ascii_input_source: Option<InputSourceId>,
    pub uppercase_letters: bool,
    pub shift_correction: Box<dyn ShiftCorrection>,
}

impl ControllerOptions {
    pub fn from_config(config: &RecorderConfig) -> Self {
        Self {
            ascii_input_source: config
                .layout
                .ascii_input_source
                .as_deref()
                .map(InputSourceId::from),
            uppercase_letters: config.display.uppercase_letters,
            shift_correction: shift::from_config(&config.shift_correction),
        }
    }

    /// Like [`from_config`](Self::from_config), but rejects an ASCII input
    /// source `layout` has no data for. Every ASCII lookup against it would
    /// fail and silently fall back to the literal key code.
    pub fn for_layout<L>(config: &RecorderConfig, layout: &L) -> Result<Self, PlatformError>
    where
        L: KeyboardLayoutProvider + ?Sized,
    {
        let options = Self::from_config(config);
        if let Some(ascii) = &options.ascii_input_source {
            if !layout.has_input_source(ascii) {
                return Err(PlatformError::UnknownInputSource(ascii.to_string()));
            }
        }
        Ok(options)
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            ascii_input_source: None,
            uppercase_letters: true,
            shift_correction: Box::new(LayoutShiftRule),
        }
    }
}
