//! The shortcut controller: owns one shortcut and keeps its derived view
//! current.
//!
//! All derived fields are recomputed together whenever the content or the
//! selected input source changes, and observers run once per recompute with
//! the finished view.

mod options;


pub use options::ControllerOptions;

use std::rc::Rc;

use recorder_common::{Event, EventBus};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, trace, warn};

use crate::derive::derive_view;
use crate::layout::{InputSourceId, KeyboardLayoutProvider};
use crate::shortcut::Shortcut;
use crate::view::{DerivedShortcutView, SelectionKey, SelectionValue};

type Observer = Box<dyn FnMut(Option<&DerivedShortcutView>)>;

/// Handle returned by [`ShortcutController::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Owns the current shortcut and publishes its [`DerivedShortcutView`].
///
/// Single-threaded: callers serialize access.
pub struct ShortcutController {
    layout: Rc<dyn KeyboardLayoutProvider>,
    events: EventBus,
    options: ControllerOptions,
    content: Option<Shortcut>,
    recorded_source: Option<InputSourceId>,
    view: Option<DerivedShortcutView>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
    subscription: Option<broadcast::Receiver<Event>>,
}

impl ShortcutController {
    pub fn new(
        layout: Rc<dyn KeyboardLayoutProvider>,
        events: EventBus,
        options: ControllerOptions,
    ) -> Self {
        Self {
            layout,
            events,
            options,
            content: None,
            recorded_source: None,
            view: None,
            observers: Vec::new(),
            next_observer_id: 0,
            subscription: None,
        }
    }

    /// Controller holding `content` from the start. No observer runs.
    pub fn with_content(
        layout: Rc<dyn KeyboardLayoutProvider>,
        events: EventBus,
        options: ControllerOptions,
        content: Option<Shortcut>,
    ) -> Self {
        let mut controller = Self::new(layout, events, options);
        controller.content = content;
        controller.recorded_source = content.map(|_| controller.layout.current_input_source());
        controller.view = controller.derive();
        controller
    }

    pub fn content(&self) -> Option<Shortcut> {
        self.content
    }

    /// Current derived view, `None` while no shortcut is held.
    pub fn view(&self) -> Option<&DerivedShortcutView> {
        self.view.as_ref()
    }

    /// Value of one derived field.
    pub fn selection(&self, key: SelectionKey) -> Option<SelectionValue> {
        self.view.as_ref().map(|view| view.get(key))
    }

    /// Input source that was active when the content was set.
    pub fn recorded_input_source(&self) -> Option<&InputSourceId> {
        self.recorded_source.as_ref()
    }

    /// Replace the content. Returns `false` when `content` equals what is held.
    pub fn set_content(&mut self, content: Option<Shortcut>) -> bool {
        if self.content == content {
            trace!("content unchanged, skipping recompute");
            return false;
        }

        self.content = content;
        self.recorded_source = content.map(|_| self.layout.current_input_source());
        debug!(
            shortcut = ?content,
            input_source = ?self.recorded_source,
            "content changed"
        );
        self.update_derived();
        true
    }

    pub fn set_shortcut(&mut self, shortcut: Shortcut) -> bool {
        self.set_content(Some(shortcut))
    }

    pub fn add(&mut self, shortcut: Shortcut) -> bool {
        self.set_content(Some(shortcut))
    }

    /// Clear the content if it is `shortcut`.
    pub fn remove(&mut self, shortcut: &Shortcut) -> bool {
        if self.content.as_ref() == Some(shortcut) {
            self.set_content(None)
        } else {
            false
        }
    }

    /// React to a change of the selected input source.
    ///
    /// Returns `false` (and notifies nobody) when no shortcut is held.
    pub fn on_input_source_changed(&mut self) -> bool {
        if self.content.is_none() {
            trace!("input source changed with no content");
            return false;
        }
        debug!(
            input_source = %self.layout.current_input_source(),
            "input source changed"
        );
        self.update_derived();
        true
    }

    /// Start listening for [`Event::SelectedInputSourceChanged`].
    /// Returns `false` if already subscribed.
    pub fn subscribe_to_input_source_changes(&mut self) -> bool {
        if self.subscription.is_some() {
            return false;
        }
        self.subscription = Some(self.events.subscribe());
        debug!("subscribed to input source changes");
        true
    }

    /// Stop listening. Returns `false` if not subscribed.
    pub fn unsubscribe_from_input_source_changes(&mut self) -> bool {
        if self.subscription.take().is_none() {
            return false;
        }
        debug!("unsubscribed from input source changes");
        true
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Drain delivered events; any number of input source changes collapse
    /// into one recompute. [`Event::Shutdown`] ends the subscription.
    /// Returns whether a recompute happened.
    pub fn process_pending_events(&mut self) -> bool {
        let Some(receiver) = self.subscription.as_mut() else {
            return false;
        };

        let mut source_changed = false;
        let mut shutdown = false;
        loop {
            match receiver.try_recv() {
                Ok(Event::SelectedInputSourceChanged) => source_changed = true,
                Ok(Event::Shutdown) => {
                    shutdown = true;
                    break;
                }
                Err(TryRecvError::Lagged(missed)) => {
                    warn!("input source subscription lagged by {missed} events");
                    source_changed = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        if shutdown {
            self.unsubscribe_from_input_source_changes();
        }
        source_changed && self.on_input_source_changed()
    }

    /// Register `observer`; it runs after every recompute.
    ///
    /// The first observer subscribes to input source changes if needed.
    pub fn observe(
        &mut self,
        observer: impl FnMut(Option<&DerivedShortcutView>) + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        self.subscribe_to_input_source_changes();
        id
    }

    /// Remove an observer. Removing the last one unsubscribes if needed.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        let removed = self.observers.len() != before;
        if removed && self.observers.is_empty() {
            self.unsubscribe_from_input_source_changes();
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn derive(&self) -> Option<DerivedShortcutView> {
        let shortcut = self.content.as_ref()?;
        let recorded = self.recorded_source.as_ref()?;
        Some(derive_view(
            shortcut,
            recorded,
            self.layout.as_ref(),
            &self.options,
        ))
    }

    /// Recompute, swap the view in, then notify.
    fn update_derived(&mut self) {
        let next = self.derive();

        if let (Some(previous), Some(next)) = (&self.view, &next) {
            debug!(changed = ?previous.changed_keys(next), "derived view recomputed");
        }
        self.view = next;

        let view = self.view.as_ref();
        for (_, observer) in self.observers.iter_mut() {
            observer(view);
        }
    }
}
