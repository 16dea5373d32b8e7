use recorder_common::RecorderError;
use recorder_core::{
    accessibility_description, modifier_glyphs, DerivedShortcutView, ResourceBundle, SelectionKey,
    SelectionValue,
};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    view: &'a DerivedShortcutView,
    accessibility_description: String,
}

/// Pretty-printed JSON of the view plus its spoken description.
pub fn to_json(view: &DerivedShortcutView, bundle: &ResourceBundle) -> Result<String, RecorderError> {
    let report = Report {
        view,
        accessibility_description: accessibility_description(view, bundle),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| RecorderError::Other(format!("failed to serialize view: {e}")))
}

/// One `label: value` line per derived field.
pub fn to_text(view: &DerivedShortcutView, bundle: &ResourceBundle) -> String {
    let mut lines = vec![
        format!("{:<26}{}", "input source:", view.input_source()),
        format!("{:<26}{}", "display:", view.display_string()),
        format!(
            "{:<26}{}",
            "accessibility:",
            accessibility_description(view, bundle)
        ),
    ];
    for key in SelectionKey::ALL {
        lines.push(format!(
            "{:<26}{}",
            format!("{}:", label(key)),
            format_value(view.get(key))
        ));
    }
    lines.join("\n")
}

fn label(key: SelectionKey) -> &'static str {
    match key {
        SelectionKey::KeyEquivalent => "key equivalent",
        SelectionKey::KeyEquivalentModifierMask => "key equivalent modifiers",
        SelectionKey::LiteralKeyCode => "literal key code",
        SelectionKey::SymbolicKeyCode => "symbolic key code",
        SelectionKey::LiteralAsciiKeyCode => "literal ascii key code",
        SelectionKey::SymbolicAsciiKeyCode => "symbolic ascii key code",
        SelectionKey::LiteralModifierFlags => "literal modifier flags",
        SelectionKey::SymbolicModifierFlags => "symbolic modifier flags",
    }
}

fn format_value(value: SelectionValue) -> String {
    match value {
        SelectionValue::Text(text) if text.is_empty() => "(none)".into(),
        SelectionValue::Text(text) => text,
        SelectionValue::ModifierMask(mask) if mask.is_empty() => "(none)".into(),
        SelectionValue::ModifierMask(mask) => modifier_glyphs(mask),
        SelectionValue::KeyCode(key_code) => key_code.to_string(),
        SelectionValue::LegacyFlags(flags) => format!("{flags:#06x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recorder_core::layout::{FRENCH, US};
    use recorder_core::{
        derive_view, ControllerOptions, InputSourceId, KeyCode, KeyboardLayoutProvider,
        ModifierFlags, Shortcut, StaticLayoutProvider,
    };

    fn french_view() -> DerivedShortcutView {
        let provider = StaticLayoutProvider::with_builtin_layouts();
        provider.select(&InputSourceId::from(FRENCH)).unwrap();
        assert_eq!(provider.current_input_source().as_str(), FRENCH);
        derive_view(
            &Shortcut::new(KeyCode(0x12), ModifierFlags::COMMAND),
            &InputSourceId::from(US),
            &provider,
            &ControllerOptions::default(),
        )
    }

    #[test]
    fn text_lists_every_field() {
        let text = to_text(&french_view(), &ResourceBundle::untranslated());
        assert!(text.contains(FRENCH));
        assert!(text.contains("\u{2318}1"));
        assert!(text.contains("Command-1"));
        assert!(text.contains("symbolic modifier flags:  0x0300"));
        assert_eq!(text.lines().count(), 3 + SelectionKey::ALL.len());
    }

    #[test]
    fn json_flattens_view() {
        let json = to_json(&french_view(), &ResourceBundle::untranslated()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["key_equivalent"], "1");
        assert_eq!(value["symbolic_key_code"], 0x12);
        assert_eq!(value["symbolic_modifier_flags"], 0x0300);
        assert_eq!(value["accessibility_description"], "Command-1");
    }

    #[test]
    fn empty_values_render_as_none() {
        assert_eq!(format_value(SelectionValue::Text(String::new())), "(none)");
        assert_eq!(
            format_value(SelectionValue::ModifierMask(ModifierFlags::empty())),
            "(none)"
        );
        assert_eq!(format_value(SelectionValue::LegacyFlags(0x0100)), "0x0100");
    }
}
