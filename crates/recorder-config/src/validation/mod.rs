//! Full configuration validation.
//!
//! Each check pushes onto a shared error list; the orchestrator collects
//! them into a single `ConfigError`.

mod helpers;


use crate::schema::{RecorderConfig, ShiftCorrectionRule};
use helpers::validate_range;
use recorder_common::ConfigError;

/// Highest virtual key code a keyboard layout can report.
pub const MAX_KEY_CODE: u16 = 127;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RecorderConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_layout(&mut errors, config);
    validate_shift_correction(&mut errors, config);
    validate_resources(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_layout(errors: &mut Vec<String>, config: &RecorderConfig) {
    if let Some(source) = &config.layout.ascii_input_source {
        if source.trim().is_empty() {
            errors.push("layout.ascii_input_source must not be empty".into());
        }
    }
}

fn validate_shift_correction(errors: &mut Vec<String>, config: &RecorderConfig) {
    let section = &config.shift_correction;

    for (i, code) in section.key_codes.iter().enumerate() {
        validate_range(
            errors,
            &format!("shift_correction.key_codes[{i}]"),
            u32::from(*code),
            0,
            u32::from(MAX_KEY_CODE),
        );
    }

    if section.rule == ShiftCorrectionRule::KeyCodes && section.key_codes.is_empty() {
        errors.push("shift_correction.key_codes is empty but rule = \"key_codes\"".into());
    }
}

fn validate_resources(errors: &mut Vec<String>, config: &RecorderConfig) {
    if let Some(dir) = &config.resources.directory {
        if dir.as_os_str().is_empty() {
            errors.push("resources.directory must not be empty".into());
        }
    }
}
