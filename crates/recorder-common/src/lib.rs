pub mod errors;
pub mod events;

pub use errors::{ConfigError, PlatformError, RecorderError};
pub use events::{Event, EventBus};

pub type Result<T> = std::result::Result<T, RecorderError>;
