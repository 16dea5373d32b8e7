//! Modifier flags and the codec between the legacy and modern bit layouts.
//!
//! [`ModifierFlags`] always holds the modern layout. The legacy layout is a
//! plain `u32` as handed out by older hotkey registration APIs. Only the four
//! shortcut modifiers survive a conversion in either direction.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Shortcut-relevant modifiers in the modern bit layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierFlags: u64 {
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const OPTION = 1 << 19;
        const COMMAND = 1 << 20;
    }
}

pub const LEGACY_COMMAND: u32 = 1 << 8;
pub const LEGACY_SHIFT: u32 = 1 << 9;
pub const LEGACY_OPTION: u32 = 1 << 11;
pub const LEGACY_CONTROL: u32 = 1 << 12;

/// Legacy bits that carry a shortcut modifier.
pub const LEGACY_MODIFIER_MASK: u32 = LEGACY_COMMAND | LEGACY_SHIFT | LEGACY_OPTION | LEGACY_CONTROL;

/// Modern/legacy bit pairs, checked independently.
const BIT_PAIRS: [(u32, ModifierFlags); 4] = [
    (LEGACY_COMMAND, ModifierFlags::COMMAND),
    (LEGACY_OPTION, ModifierFlags::OPTION),
    (LEGACY_CONTROL, ModifierFlags::CONTROL),
    (LEGACY_SHIFT, ModifierFlags::SHIFT),
];

/// Convert legacy flags to the modern layout. Unrelated bits are dropped.
pub fn to_modern(legacy: u32) -> ModifierFlags {
    BIT_PAIRS
        .iter()
        .filter(|(legacy_bit, _)| legacy & legacy_bit != 0)
        .fold(ModifierFlags::empty(), |acc, (_, modern)| acc | *modern)
}

/// Convert modern flags to the legacy layout.
pub fn to_legacy(modern: ModifierFlags) -> u32 {
    BIT_PAIRS
        .iter()
        .filter(|(_, modern_bit)| modern.contains(*modern_bit))
        .fold(0, |acc, (legacy, _)| acc | legacy)
}

impl ModifierFlags {
    /// Build from raw modern bits, masking off anything that is not a
    /// shortcut modifier (caps lock, function, device-dependent bits).
    pub fn from_raw(bits: u64) -> Self {
        Self::from_bits_truncate(bits)
    }

    /// Build from booleans, one per modifier.
    pub fn from_keys(control: bool, option: bool, shift: bool, command: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::CONTROL, control);
        flags.set(Self::OPTION, option);
        flags.set(Self::SHIFT, shift);
        flags.set(Self::COMMAND, command);
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_modern_combinations() -> Vec<ModifierFlags> {
        (0..16u8)
            .map(|i| ModifierFlags::from_keys(i & 1 != 0, i & 2 != 0, i & 4 != 0, i & 8 != 0))
            .collect()
    }

    #[test]
    fn single_bits_map_to_expected_positions() {
        assert_eq!(to_legacy(ModifierFlags::COMMAND), 0x0100);
        assert_eq!(to_legacy(ModifierFlags::SHIFT), 0x0200);
        assert_eq!(to_legacy(ModifierFlags::OPTION), 0x0800);
        assert_eq!(to_legacy(ModifierFlags::CONTROL), 0x1000);

        assert_eq!(to_modern(0x0100), ModifierFlags::COMMAND);
        assert_eq!(to_modern(0x0200), ModifierFlags::SHIFT);
        assert_eq!(to_modern(0x0800), ModifierFlags::OPTION);
        assert_eq!(to_modern(0x1000), ModifierFlags::CONTROL);
    }

    #[test]
    fn legacy_round_trip_over_all_combinations() {
        for legacy in 0..=LEGACY_MODIFIER_MASK {
            let masked = legacy & LEGACY_MODIFIER_MASK;
            assert_eq!(to_legacy(to_modern(masked)), masked, "legacy {masked:#x}");
        }
    }

    #[test]
    fn modern_round_trip_over_all_combinations() {
        let combos = all_modern_combinations();
        assert_eq!(combos.len(), 16);
        for flags in combos {
            assert_eq!(to_modern(to_legacy(flags)), flags, "modern {flags:?}");
        }
    }

    #[test]
    fn unrelated_legacy_bits_are_dropped() {
        // alphaLock (1 << 10) and rightShift (1 << 13)
        let legacy = LEGACY_COMMAND | (1 << 10) | (1 << 13);
        assert_eq!(to_modern(legacy), ModifierFlags::COMMAND);
        assert_eq!(to_legacy(to_modern(legacy)), LEGACY_COMMAND);
    }

    #[test]
    fn from_raw_masks_caps_lock_and_function() {
        let caps_lock = 1u64 << 16;
        let function = 1u64 << 23;
        let raw = ModifierFlags::SHIFT.bits() | caps_lock | function;
        assert_eq!(ModifierFlags::from_raw(raw), ModifierFlags::SHIFT);
    }

    #[test]
    fn empty_maps_to_zero() {
        assert_eq!(to_legacy(ModifierFlags::empty()), 0);
        assert_eq!(to_modern(0), ModifierFlags::empty());
    }

    #[test]
    fn flags_serialize_as_names() {
        let flags = ModifierFlags::COMMAND | ModifierFlags::SHIFT;
        let json = serde_json::to_string(&flags).unwrap();
        let back: ModifierFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }
}
