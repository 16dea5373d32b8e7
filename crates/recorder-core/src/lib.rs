pub mod binding;
pub mod controller;
pub mod derive;
pub mod display;
pub mod flags;
pub mod glyph;
pub mod key_code;
pub mod layout;
pub mod notation;
pub mod resources;
pub mod shift;
pub mod shortcut;
pub mod view;

pub use binding::RecordingTarget;
pub use controller::{ControllerOptions, ObserverId, ShortcutController};
pub use derive::derive_view;
pub use display::{accessibility_description, display_string, modifier_glyphs};
pub use flags::{to_legacy, to_modern, ModifierFlags};
pub use glyph::{glyph_for, KeyClass};
pub use key_code::KeyCode;
pub use layout::{
    InputSourceId, KeyCharacters, KeyStroke, KeyboardLayout, KeyboardLayoutProvider,
    StaticLayoutProvider,
};
pub use notation::parse_shortcut;
pub use resources::ResourceBundle;
pub use shift::{KeyCodeShiftRule, LayoutShiftRule, NoShiftCorrection, ShiftContext, ShiftCorrection};
pub use shortcut::Shortcut;
pub use view::{DerivedShortcutView, SelectionKey, SelectionValue};
