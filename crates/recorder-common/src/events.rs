//! In-process notification source.
//!
//! The host application publishes system notifications here (for example when
//! the selected keyboard input source changes) and interested components hold
//! a receiver for as long as they want to hear about them.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// The user switched keyboard layouts or input methods.
    SelectedInputSourceChanged,
    /// The host is going away; receivers should drop their subscription.
    Shutdown,
}

/// Broadcast hub for [`Event`]s.
///
/// Cloning the bus yields another handle to the same channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publishes an event, returning how many receivers it reached.
    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(?event, "publishing event");
        self.sender.send(event).unwrap_or(0)
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::SelectedInputSourceChanged);

        let event = rx.recv().await.unwrap();
        assert_eq!(event, Event::SelectedInputSourceChanged);
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        assert_eq!(rx1.recv().await.unwrap(), Event::Shutdown);
        assert_eq!(rx2.recv().await.unwrap(), Event::Shutdown);
    }

    #[test]
    fn try_recv_works_without_runtime() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(Event::SelectedInputSourceChanged);
        bus.publish(Event::Shutdown);

        assert_eq!(rx.try_recv().unwrap(), Event::SelectedInputSourceChanged);
        assert_eq!(rx.try_recv().unwrap(), Event::Shutdown);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn cloned_bus_shares_channel() {
        let bus = EventBus::new(4);
        let handle = bus.clone();
        let mut rx = bus.subscribe();

        assert_eq!(handle.publish(Event::Shutdown), 1);
        assert_eq!(rx.try_recv().unwrap(), Event::Shutdown);
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(Event::Shutdown), 0);
    }

    #[test]
    fn subscriber_count_tracks_receivers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.subscriber_count(), 0);
        let rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(rx);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn event_serde_roundtrip() {
        let json = serde_json::to_string(&Event::SelectedInputSourceChanged).unwrap();
        assert_eq!(json, r#"{"type":"SelectedInputSourceChanged"}"#);
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Event::SelectedInputSourceChanged);
    }

    #[test]
    fn unknown_event_is_rejected() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
