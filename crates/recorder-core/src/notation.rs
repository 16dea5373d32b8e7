use recorder_common::PlatformError;

use crate::flags::ModifierFlags;
use crate::key_code::KeyCode;
use crate::layout::{stroke_for, InputSourceId, KeyboardLayoutProvider};
use crate::shortcut::Shortcut;

/// Parses a human-readable shortcut like `"Cmd+Shift+Tab"`, `"Option+K"` or
/// `"Cmd++"` into a [`Shortcut`].
///
/// Modifier tokens:
/// - `"Cmd"` / `"Command"`
/// - `"Option"` / `"Opt"` / `"Alt"`
/// - `"Control"` / `"Ctrl"`
/// - `"Shift"`
///
/// The last token is the key: either a named special key or one character
/// typed under `source`. A character that needs Shift on that layout adds
/// Shift to the result.
pub fn parse_shortcut<L>(
    s: &str,
    layout: &L,
    source: &InputSourceId,
) -> Result<Shortcut, PlatformError>
where
    L: KeyboardLayoutProvider + ?Sized,
{
    let s = s.trim();
    if s.is_empty() {
        return Err(PlatformError::InvalidShortcut("empty shortcut string".into()));
    }

    let (modifier_part, key_token) = split_key(s);

    let mut flags = ModifierFlags::empty();
    if !modifier_part.is_empty() {
        for token in modifier_part.split('+').map(str::trim) {
            let modifier = normalize_modifier(token).ok_or_else(|| {
                PlatformError::InvalidShortcut(format!("unrecognized modifier: {token}"))
            })?;
            flags |= modifier;
        }
    }

    let key_token = key_token.trim();
    if key_token.is_empty() {
        return Err(PlatformError::InvalidShortcut(
            "shortcut has no key component".into(),
        ));
    }

    if let Some(key_code) = named_key(key_token) {
        return Ok(Shortcut::new(key_code, flags));
    }

    let mut chars = key_token.chars();
    let (Some(character), None) = (chars.next(), chars.next()) else {
        return Err(PlatformError::InvalidShortcut(format!(
            "unknown key: {key_token}"
        )));
    };
    let character = character.to_lowercase().next().unwrap_or(character);

    let stroke = stroke_for(layout, character, source).ok_or_else(|| {
        PlatformError::InvalidShortcut(format!("no key types '{character}' on {source}"))
    })?;
    if stroke.requires_shift {
        flags |= ModifierFlags::SHIFT;
    }
    Ok(Shortcut::new(stroke.key_code, flags))
}

/// Split off the key token. `"Cmd++"` and `"+"` name the plus key.
fn split_key(s: &str) -> (&str, &str) {
    if s == "+" {
        return ("", "+");
    }
    if let Some(prefix) = s.strip_suffix("++") {
        return (prefix, "+");
    }
    s.rsplit_once('+').unwrap_or(("", s))
}

fn normalize_modifier(token: &str) -> Option<ModifierFlags> {
    match token.to_lowercase().as_str() {
        "cmd" | "command" => Some(ModifierFlags::COMMAND),
        "option" | "opt" | "alt" => Some(ModifierFlags::OPTION),
        "ctrl" | "control" => Some(ModifierFlags::CONTROL),
        "shift" => Some(ModifierFlags::SHIFT),
        _ => None,
    }
}

fn named_key(token: &str) -> Option<KeyCode> {
    let key_code = match token.to_lowercase().as_str() {
        "tab" => KeyCode::TAB,
        "return" => KeyCode::RETURN,
        "enter" => KeyCode::KEYPAD_ENTER,
        "delete" | "backspace" => KeyCode::DELETE,
        "forwarddelete" | "del" => KeyCode::FORWARD_DELETE,
        "clear" => KeyCode::KEYPAD_CLEAR,
        "left" => KeyCode::LEFT_ARROW,
        "right" => KeyCode::RIGHT_ARROW,
        "up" => KeyCode::UP_ARROW,
        "down" => KeyCode::DOWN_ARROW,
        "pageup" => KeyCode::PAGE_UP,
        "pagedown" => KeyCode::PAGE_DOWN,
        "home" => KeyCode::HOME,
        "end" => KeyCode::END,
        "escape" | "esc" => KeyCode::ESCAPE,
        "space" => KeyCode::SPACE,
        _ => return None,
    };
    Some(key_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{StaticLayoutProvider, FRENCH, US};

    fn parse(s: &str) -> Result<Shortcut, PlatformError> {
        parse_shortcut(
            s,
            &StaticLayoutProvider::with_builtin_layouts(),
            &InputSourceId::from(US),
        )
    }

    #[test]
    fn parse_simple_letter() {
        let shortcut = parse("Cmd+A").unwrap();
        assert_eq!(shortcut.key_code(), KeyCode(0x00));
        assert_eq!(shortcut.modifier_flags(), ModifierFlags::COMMAND);
    }

    #[test]
    fn parse_multiple_modifiers() {
        let shortcut = parse("Ctrl+Option+Shift+Cmd+K").unwrap();
        assert_eq!(shortcut.key_code(), KeyCode(0x28));
        assert_eq!(shortcut.modifier_flags(), ModifierFlags::all());
    }

    #[test]
    fn parse_modifier_aliases() {
        assert_eq!(parse("Command+K").unwrap(), parse("cmd+k").unwrap());
        assert_eq!(parse("Alt+K").unwrap(), parse("Opt+K").unwrap());
        assert_eq!(parse("Control+K").unwrap(), parse("Ctrl+K").unwrap());
    }

    #[test]
    fn parse_named_keys() {
        let cases = [
            ("Cmd+Shift+Tab", KeyCode::TAB),
            ("Cmd+Return", KeyCode::RETURN),
            ("Cmd+Enter", KeyCode::KEYPAD_ENTER),
            ("Cmd+Backspace", KeyCode::DELETE),
            ("Cmd+ForwardDelete", KeyCode::FORWARD_DELETE),
            ("Esc", KeyCode::ESCAPE),
            ("Ctrl+Space", KeyCode::SPACE),
            ("Option+PageDown", KeyCode::PAGE_DOWN),
            ("Cmd+Left", KeyCode::LEFT_ARROW),
            ("Cmd+Right", KeyCode::RIGHT_ARROW),
            ("Ctrl+Up", KeyCode::UP_ARROW),
            ("Ctrl+Down", KeyCode::DOWN_ARROW),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap().key_code(), expected, "{input}");
        }
    }

    #[test]
    fn parse_bare_key() {
        let shortcut = parse("Space").unwrap();
        assert_eq!(shortcut.modifier_flags(), ModifierFlags::empty());
    }

    #[test]
    fn parse_plus_key_adds_shift() {
        let shortcut = parse("Cmd++").unwrap();
        assert_eq!(shortcut.key_code(), KeyCode(0x18));
        assert_eq!(
            shortcut.modifier_flags(),
            ModifierFlags::COMMAND | ModifierFlags::SHIFT
        );
    }

    #[test]
    fn parse_uses_given_layout() {
        let layout = StaticLayoutProvider::with_builtin_layouts();
        let shortcut = parse_shortcut("Cmd+A", &layout, &InputSourceId::from(FRENCH)).unwrap();
        assert_eq!(shortcut.key_code(), KeyCode(0x0C));

        let digit = parse_shortcut("Cmd+1", &layout, &InputSourceId::from(FRENCH)).unwrap();
        assert_eq!(digit.key_code(), KeyCode(0x12));
        assert!(digit.modifier_flags().contains(ModifierFlags::SHIFT));
    }

    #[test]
    fn parse_whitespace_tolerant() {
        assert_eq!(parse(" Cmd + K ").unwrap(), parse("Cmd+K").unwrap());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse(""), Err(PlatformError::InvalidShortcut(_))));
        assert!(matches!(parse("Cmd+"), Err(PlatformError::InvalidShortcut(_))));
        assert!(matches!(parse("Hyper+K"), Err(PlatformError::InvalidShortcut(_))));
        assert!(matches!(parse("Cmd+F13"), Err(PlatformError::InvalidShortcut(_))));
        assert!(matches!(parse("Cmd+é"), Err(PlatformError::InvalidShortcut(_))));
    }
}
