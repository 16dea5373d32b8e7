//! Localized strings shipped alongside the recorder.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use recorder_common::PlatformError;
use tracing::info;

/// File inside the resource directory holding `key → localized string`.
pub const STRINGS_FILE: &str = "strings.json";

/// Localized string table.
///
/// A located bundle must exist on disk; failing to find it means a broken
/// install and is reported as an error rather than papered over.
#[derive(Debug, Clone, Default)]
pub struct ResourceBundle {
    root: Option<PathBuf>,
    strings: HashMap<String, String>,
}

impl ResourceBundle {
    /// Load `strings.json` from `root`.
    pub fn locate(root: impl AsRef<Path>) -> Result<Self, PlatformError> {
        let root = root.as_ref();
        let path = root.join(STRINGS_FILE);
        if !path.is_file() {
            return Err(PlatformError::ResourceNotFound(path));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            PlatformError::ResourceParseError(format!("failed to read {}: {e}", path.display()))
        })?;
        let strings: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            PlatformError::ResourceParseError(format!("failed to parse {}: {e}", path.display()))
        })?;

        info!(
            "loaded {} localized strings from {}",
            strings.len(),
            root.display()
        );
        Ok(Self {
            root: Some(root.to_path_buf()),
            strings,
        })
    }

    /// Bundle with no translations; every key maps to itself.
    pub fn untranslated() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Localized string for `key`, or `key` itself.
    pub fn loc<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }
}
