use super::*;
use crate::key_code::KeyCode;

#[test]
fn us_layout_types_letters_and_digits() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let us = InputSourceId::from(US);

    assert_eq!(unshifted_character(&provider, KeyCode(0x00), &us), Some('a'));
    assert_eq!(unshifted_character(&provider, KeyCode(0x12), &us), Some('1'));
    assert_eq!(
        provider.characters(KeyCode(0x12), &us).unwrap().shifted,
        Some('!')
    );
}

#[test]
fn special_keys_have_no_characters() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let us = InputSourceId::from(US);
    assert!(provider.characters(KeyCode::TAB, &us).is_none());
    assert!(provider.characters(KeyCode::ESCAPE, &us).is_none());
}

#[test]
fn french_swaps_a_and_q() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let fr = InputSourceId::from(FRENCH);
    assert_eq!(unshifted_character(&provider, KeyCode(0x00), &fr), Some('q'));
    assert_eq!(unshifted_character(&provider, KeyCode(0x0C), &fr), Some('a'));
}

#[test]
fn german_swaps_y_and_z() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let de = InputSourceId::from(GERMAN);
    assert_eq!(unshifted_character(&provider, KeyCode(0x06), &de), Some('y'));
    assert_eq!(unshifted_character(&provider, KeyCode(0x10), &de), Some('z'));
}

#[test]
fn stroke_prefers_unshifted_key() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let us = InputSourceId::from(US);
    let stroke = stroke_for(&provider, 'a', &us).unwrap();
    assert_eq!(stroke.key_code, KeyCode(0x00));
    assert!(!stroke.requires_shift);
}

#[test]
fn stroke_reports_shift_for_french_digits() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let fr = InputSourceId::from(FRENCH);
    let stroke = stroke_for(&provider, '1', &fr).unwrap();
    assert_eq!(stroke.key_code, KeyCode(0x12));
    assert!(stroke.requires_shift);
}

#[test]
fn stroke_for_missing_character() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let us = InputSourceId::from(US);
    assert!(stroke_for(&provider, 'ß', &us).is_none());
}

#[test]
fn unknown_source_yields_nothing() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let klingon = InputSourceId::from("com.example.Klingon");
    assert!(provider.characters(KeyCode(0x00), &klingon).is_none());
    assert!(provider.key_codes_for('a', &klingon).is_empty());
}

#[test]
fn select_switches_current_source() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    assert_eq!(provider.current_input_source(), InputSourceId::from(US));

    provider.select(&InputSourceId::from(GERMAN)).unwrap();
    assert_eq!(provider.current_input_source(), InputSourceId::from(GERMAN));
    assert_eq!(provider.ascii_capable_input_source(), InputSourceId::from(US));
}

#[test]
fn select_unknown_source_fails() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let result = provider.select(&InputSourceId::from("com.example.Klingon"));
    assert!(matches!(
        result,
        Err(recorder_common::PlatformError::UnknownInputSource(_))
    ));
    assert_eq!(provider.current_input_source(), InputSourceId::from(US));
}

#[test]
fn input_sources_are_sorted() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    let ids: Vec<&str> = provider.input_sources().iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec![FRENCH, GERMAN, US]);
}

#[test]
fn custom_layout_builder() {
    let layout = KeyboardLayout::new("A").with_key(0, 'a', 'A');
    assert_eq!(layout.len(), 1);
    assert_eq!(layout.key_codes_for('A'), vec![KeyCode(0)]);
    assert!(KeyboardLayout::new("empty").is_empty());
}

#[test]
fn has_input_source_matches_known_layouts() {
    let provider = StaticLayoutProvider::with_builtin_layouts();
    assert!(provider.has_input_source(&InputSourceId::from(GERMAN)));
    assert!(!provider.has_input_source(&InputSourceId::from("com.apple.keylayout.ABC")));
}
