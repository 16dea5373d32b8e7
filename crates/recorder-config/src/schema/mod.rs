//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod display;
mod layout;
mod resources;
mod shift_correction;
mod system;

pub use display::*;
pub use layout::*;
pub use resources::*;
pub use shift_correction::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the shortcut recorder.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    pub layout: LayoutConfig,
    pub display: DisplayConfig,
    pub shift_correction: ShiftCorrectionConfig,
    pub resources: ResourcesConfig,
    pub logging: LoggingConfig,
}
