//! Shortcut recorder configuration.
//!
//! Provides TOML-based configuration with full validation. All sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use recorder_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{RecorderConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};

use recorder_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file if none exists.
pub fn load_config() -> Result<RecorderConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &RecorderConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = RecorderConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"display\""));
        assert!(json.contains("\"shift_correction\""));
        assert!(json.contains("\"resources\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = RecorderConfig::default();
        let json = config_to_json(&config);
        let parsed: RecorderConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.display.uppercase_letters);
        assert_eq!(
            parsed.shift_correction.rule,
            schema::ShiftCorrectionRule::Layout
        );
    }
}
