//! Human-readable renderings of shortcuts.

use crate::flags::ModifierFlags;
use crate::glyph::KeyClass;
use crate::resources::ResourceBundle;
use crate::view::DerivedShortcutView;

/// Display order of modifiers, with glyph and English name.
const MODIFIERS: [(ModifierFlags, char, &str); 4] = [
    (ModifierFlags::CONTROL, '\u{2303}', "Control"), // ⌃
    (ModifierFlags::OPTION, '\u{2325}', "Option"),   // ⌥
    (ModifierFlags::SHIFT, '\u{21E7}', "Shift"),     // ⇧
    (ModifierFlags::COMMAND, '\u{2318}', "Command"), // ⌘
];

/// Glyphs for every set modifier, Control → Option → Shift → Command.
pub fn modifier_glyphs(flags: ModifierFlags) -> String {
    MODIFIERS
        .iter()
        .filter(|(flag, _, _)| flags.contains(*flag))
        .map(|(_, glyph, _)| *glyph)
        .collect()
}

/// Modifier glyphs followed by the key equivalent.
///
/// Letters are shown uppercase when `uppercase_letters` is set, matching how
/// menus print shortcuts.
pub fn display_string(flags: ModifierFlags, key_equivalent: &str, uppercase_letters: bool) -> String {
    let mut out = modifier_glyphs(flags);
    if uppercase_letters {
        push_uppercase(&mut out, key_equivalent);
    } else {
        out.push_str(key_equivalent);
    }
    out
}

/// Uppercase a single-character key equivalent whose uppercase form is one
/// character too. Anything else (`ß`, which would become `SS`) is kept.
fn push_uppercase(out: &mut String, key_equivalent: &str) {
    let mut chars = key_equivalent.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let mut upper = c.to_uppercase();
        if let (Some(u), None) = (upper.next(), upper.next()) {
            out.push(u);
            return;
        }
    }
    out.push_str(key_equivalent);
}

/// Spoken-style description such as `Command-Shift-Tab`, localized through
/// `bundle`.
pub fn accessibility_description(view: &DerivedShortcutView, bundle: &ResourceBundle) -> String {
    let flags = view.key_equivalent_modifier_mask();
    let mut parts: Vec<String> = MODIFIERS
        .iter()
        .filter(|(flag, _, _)| flags.contains(*flag))
        .map(|(_, _, name)| bundle.loc(name).to_string())
        .collect();

    let key = match KeyClass::from_key_code(view.symbolic_key_code()) {
        Some(class) => bundle.loc(class.name()).to_string(),
        None if !view.key_equivalent().is_empty() => {
            let mut key = String::new();
            push_uppercase(&mut key, view.key_equivalent());
            key
        }
        None => view.symbolic_key_code().to_string(),
    };
    parts.push(key);
    parts.join("-")
}
