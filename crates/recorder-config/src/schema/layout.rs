use serde::{Deserialize, Serialize};

/// Keyboard layout selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Input source used for ASCII key code derivation.
    ///
    /// When unset, the layout provider's ASCII-capable source is used.
    pub ascii_input_source: Option<String>,
}
