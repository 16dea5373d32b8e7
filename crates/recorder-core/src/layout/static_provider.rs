use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use recorder_common::PlatformError;
use tracing::debug;

use super::{InputSourceId, KeyCharacters, KeyboardLayoutProvider};
use crate::key_code::KeyCode;

/// A keyboard layout described by a key code → characters table.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    id: InputSourceId,
    keys: BTreeMap<KeyCode, KeyCharacters>,
}

impl KeyboardLayout {
    pub fn new(id: impl Into<InputSourceId>) -> Self {
        Self {
            id: id.into(),
            keys: BTreeMap::new(),
        }
    }

    /// Copy of `base` under a different identifier.
    pub fn based_on(id: impl Into<InputSourceId>, base: &KeyboardLayout) -> Self {
        Self {
            id: id.into(),
            keys: base.keys.clone(),
        }
    }

    /// Set what `key_code` types, replacing any previous entry.
    pub fn with_key(mut self, key_code: u16, unshifted: char, shifted: char) -> Self {
        self.keys.insert(
            KeyCode(key_code),
            KeyCharacters {
                unshifted: Some(unshifted),
                shifted: Some(shifted),
            },
        );
        self
    }

    pub fn with_keys(self, keys: &[(u16, char, char)]) -> Self {
        keys.iter()
            .fold(self, |layout, (code, unshifted, shifted)| {
                layout.with_key(*code, *unshifted, *shifted)
            })
    }

    pub fn id(&self) -> &InputSourceId {
        &self.id
    }

    pub fn characters(&self, key_code: KeyCode) -> Option<KeyCharacters> {
        self.keys.get(&key_code).copied()
    }

    /// Keys typing `character`, in ascending key code order.
    pub fn key_codes_for(&self, character: char) -> Vec<KeyCode> {
        self.keys
            .iter()
            .filter(|(_, chars)| {
                chars.unshifted == Some(character) || chars.shifted == Some(character)
            })
            .map(|(code, _)| *code)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// In-memory [`KeyboardLayoutProvider`].
///
/// The selected input source is interior-mutable so a shared provider can be
/// switched while the engine holds it.
#[derive(Debug)]
pub struct StaticLayoutProvider {
    layouts: HashMap<InputSourceId, KeyboardLayout>,
    ascii: InputSourceId,
    current: RefCell<InputSourceId>,
}

impl StaticLayoutProvider {
    /// Provider whose ASCII-capable and initially selected source is `ascii`.
    pub fn new(ascii: KeyboardLayout) -> Self {
        let id = ascii.id().clone();
        let mut layouts = HashMap::new();
        layouts.insert(id.clone(), ascii);
        Self {
            layouts,
            ascii: id.clone(),
            current: RefCell::new(id),
        }
    }

    /// US, French and German layouts, with US selected.
    pub fn with_builtin_layouts() -> Self {
        Self::new(super::us_layout())
            .with_layout(super::french_layout())
            .with_layout(super::german_layout())
    }

    pub fn with_layout(mut self, layout: KeyboardLayout) -> Self {
        self.add_layout(layout);
        self
    }

    pub fn add_layout(&mut self, layout: KeyboardLayout) {
        self.layouts.insert(layout.id().clone(), layout);
    }

    /// Make `id` the current input source.
    pub fn select(&self, id: &InputSourceId) -> Result<(), PlatformError> {
        if !self.layouts.contains_key(id) {
            return Err(PlatformError::UnknownInputSource(id.to_string()));
        }
        debug!(input_source = %id, "selecting input source");
        *self.current.borrow_mut() = id.clone();
        Ok(())
    }

    /// Known input sources, sorted.
    pub fn input_sources(&self) -> Vec<&InputSourceId> {
        let mut ids: Vec<_> = self.layouts.keys().collect();
        ids.sort();
        ids
    }

    pub fn contains(&self, id: &InputSourceId) -> bool {
        self.layouts.contains_key(id)
    }
}

impl KeyboardLayoutProvider for StaticLayoutProvider {
    fn current_input_source(&self) -> InputSourceId {
        self.current.borrow().clone()
    }

    fn ascii_capable_input_source(&self) -> InputSourceId {
        self.ascii.clone()
    }

    fn characters(&self, key_code: KeyCode, source: &InputSourceId) -> Option<KeyCharacters> {
        self.layouts.get(source)?.characters(key_code)
    }

    fn key_codes_for(&self, character: char, source: &InputSourceId) -> Vec<KeyCode> {
        self.layouts
            .get(source)
            .map(|layout| layout.key_codes_for(character))
            .unwrap_or_default()
    }

    fn has_input_source(&self, source: &InputSourceId) -> bool {
        self.contains(source)
    }
}
