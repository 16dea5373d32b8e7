//! Derivation of every secondary representation of a shortcut.

use tracing::trace;

use crate::controller::ControllerOptions;
use crate::display::display_string;
use crate::flags::{to_legacy, ModifierFlags, LEGACY_SHIFT};
use crate::glyph::glyph_for;
use crate::key_code::KeyCode;
use crate::layout::{stroke_for, unshifted_character, InputSourceId, KeyboardLayoutProvider};
use crate::shift::ShiftContext;
use crate::shortcut::Shortcut;
use crate::view::DerivedShortcutView;

/// Compute the full view of `shortcut`, recorded while `recorded_source` was
/// active, against the layout's current input source.
///
/// Key code lookups that find nothing fall back to the literal key code.
pub fn derive_view<L>(
    shortcut: &Shortcut,
    recorded_source: &InputSourceId,
    layout: &L,
    options: &ControllerOptions,
) -> DerivedShortcutView
where
    L: KeyboardLayoutProvider + ?Sized,
{
    let current = layout.current_input_source();
    let ascii = options
        .ascii_input_source
        .clone()
        .unwrap_or_else(|| layout.ascii_capable_input_source());

    let literal = shortcut.key_code();
    let flags = shortcut.modifier_flags();

    let recorded_char = unshifted_character(layout, literal, recorded_source);
    let current_char = unshifted_character(layout, literal, &current);

    let symbolic_stroke = recorded_char.and_then(|c| stroke_for(layout, c, &current));
    let symbolic = symbolic_stroke.map_or(literal, |stroke| stroke.key_code);
    if symbolic_stroke.is_none() {
        trace!(key_code = %literal, input_source = %current, "no symbolic key, using literal");
    }

    let ascii_key = |character: Option<char>| -> KeyCode {
        character
            .and_then(|c| stroke_for(layout, c, &ascii))
            .map_or(literal, |stroke| stroke.key_code)
    };
    let literal_ascii = ascii_key(current_char);
    let symbolic_ascii = ascii_key(recorded_char);

    let literal_flags = to_legacy(flags);
    let mut symbolic_flags = literal_flags;
    if let (Some(character), Some(stroke)) = (recorded_char, symbolic_stroke) {
        if !flags.contains(ModifierFlags::SHIFT) {
            let ctx = ShiftContext {
                character,
                stroke,
                recorded_flags: flags,
                input_source: &current,
            };
            if options.shift_correction.requires_implicit_shift(&ctx) {
                trace!(%character, key_code = %stroke.key_code, "adding implicit shift");
                symbolic_flags |= LEGACY_SHIFT;
            }
        }
    }

    let key_equivalent = match glyph_for(symbolic) {
        Some(glyph) => glyph.to_string(),
        None => symbolic_stroke
            .and(recorded_char)
            .or(current_char)
            .map(String::from)
            .unwrap_or_default(),
    };
    let display = display_string(flags, &key_equivalent, options.uppercase_letters);

    DerivedShortcutView {
        input_source: current,
        key_equivalent,
        key_equivalent_modifier_mask: flags,
        literal_key_code: literal,
        symbolic_key_code: symbolic,
        literal_ascii_key_code: literal_ascii,
        symbolic_ascii_key_code: symbolic_ascii,
        literal_modifier_flags: literal_flags,
        symbolic_modifier_flags: symbolic_flags,
        display_string: display,
    }
}
