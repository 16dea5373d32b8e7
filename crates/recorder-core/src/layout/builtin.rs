//! Built-in layout tables keyed by ANSI virtual key codes.
//!
//! Only the character-producing keys are listed; special keys are rendered
//! through the glyph table.

use super::static_provider::KeyboardLayout;

pub const US: &str = "com.apple.keylayout.US";
pub const FRENCH: &str = "com.apple.keylayout.French";
pub const GERMAN: &str = "com.apple.keylayout.German";

const US_KEYS: &[(u16, char, char)] = &[
    (0x00, 'a', 'A'),
    (0x01, 's', 'S'),
    (0x02, 'd', 'D'),
    (0x03, 'f', 'F'),
    (0x04, 'h', 'H'),
    (0x05, 'g', 'G'),
    (0x06, 'z', 'Z'),
    (0x07, 'x', 'X'),
    (0x08, 'c', 'C'),
    (0x09, 'v', 'V'),
    (0x0B, 'b', 'B'),
    (0x0C, 'q', 'Q'),
    (0x0D, 'w', 'W'),
    (0x0E, 'e', 'E'),
    (0x0F, 'r', 'R'),
    (0x10, 'y', 'Y'),
    (0x11, 't', 'T'),
    (0x12, '1', '!'),
    (0x13, '2', '@'),
    (0x14, '3', '#'),
    (0x15, '4', '$'),
    (0x16, '6', '^'),
    (0x17, '5', '%'),
    (0x18, '=', '+'),
    (0x19, '9', '('),
    (0x1A, '7', '&'),
    (0x1B, '-', '_'),
    (0x1C, '8', '*'),
    (0x1D, '0', ')'),
    (0x1E, ']', '}'),
    (0x1F, 'o', 'O'),
    (0x20, 'u', 'U'),
    (0x21, '[', '{'),
    (0x22, 'i', 'I'),
    (0x23, 'p', 'P'),
    (0x25, 'l', 'L'),
    (0x26, 'j', 'J'),
    (0x27, '\'', '"'),
    (0x28, 'k', 'K'),
    (0x29, ';', ':'),
    (0x2A, '\\', '|'),
    (0x2B, ',', '<'),
    (0x2C, '/', '?'),
    (0x2D, 'n', 'N'),
    (0x2E, 'm', 'M'),
    (0x2F, '.', '>'),
    (0x32, '`', '~'),
];

// AZERTY: digits sit behind Shift.
const FRENCH_OVERRIDES: &[(u16, char, char)] = &[
    (0x00, 'q', 'Q'),
    (0x06, 'w', 'W'),
    (0x0C, 'a', 'A'),
    (0x0D, 'z', 'Z'),
    (0x12, '&', '1'),
    (0x13, 'é', '2'),
    (0x14, '"', '3'),
    (0x15, '\'', '4'),
    (0x16, '§', '6'),
    (0x17, '(', '5'),
    (0x18, '-', '_'),
    (0x19, 'ç', '9'),
    (0x1A, 'è', '7'),
    (0x1B, ')', '°'),
    (0x1C, '!', '8'),
    (0x1D, 'à', '0'),
    (0x1E, '$', '*'),
    (0x21, '^', '¨'),
    (0x27, 'ù', '%'),
    (0x29, 'm', 'M'),
    (0x2A, '`', '£'),
    (0x2B, ';', '.'),
    (0x2C, '=', '+'),
    (0x2E, ',', '?'),
    (0x2F, ':', '/'),
    (0x32, '<', '>'),
];

// QWERTZ: Y and Z swapped, umlauts on the punctuation keys.
const GERMAN_OVERRIDES: &[(u16, char, char)] = &[
    (0x06, 'y', 'Y'),
    (0x10, 'z', 'Z'),
    (0x13, '2', '"'),
    (0x14, '3', '§'),
    (0x16, '6', '&'),
    (0x18, '´', '`'),
    (0x19, '9', ')'),
    (0x1A, '7', '/'),
    (0x1B, 'ß', '?'),
    (0x1C, '8', '('),
    (0x1D, '0', '='),
    (0x1E, '+', '*'),
    (0x21, 'ü', 'Ü'),
    (0x27, 'ä', 'Ä'),
    (0x29, 'ö', 'Ö'),
    (0x2A, '#', '\''),
    (0x2B, ',', ';'),
    (0x2C, '-', '_'),
    (0x2F, '.', ':'),
    (0x32, '<', '>'),
];

pub fn us_layout() -> KeyboardLayout {
    KeyboardLayout::new(US).with_keys(US_KEYS)
}

pub fn french_layout() -> KeyboardLayout {
    KeyboardLayout::based_on(FRENCH, &us_layout()).with_keys(FRENCH_OVERRIDES)
}

pub fn german_layout() -> KeyboardLayout {
    KeyboardLayout::based_on(GERMAN, &us_layout()).with_keys(GERMAN_OVERRIDES)
}
