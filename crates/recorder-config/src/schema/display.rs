use serde::{Deserialize, Serialize};

/// Display string rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show letter keys uppercased (`⌘A` rather than `⌘a`).
    pub uppercase_letters: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            uppercase_letters: true,
        }
    }
}
