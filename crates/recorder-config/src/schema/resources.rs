use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Localized resources location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Directory holding `strings.json`. Optional; when set it must exist.
    pub directory: Option<PathBuf>,
}
