//! # Event bus for broadcasting task lifecycle events.
//!
//! [`EventBus`] is a thin wrapper around [`tokio::sync::broadcast`] that
//! provides non-blocking event publishing from any number of bound-task
//! invocations running concurrently.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                         Consumers (many):
//!   invocation #1 ──┐                     ┌──► recv() loop (UI state, audit)
//!   invocation #2 ──┼─────► EventBus ─────┼──► recv() loop (metrics)
//!   invocation #N ──┘   (broadcast chan)  └──► ...
//! ```
//!
//! The bus also serves as the **identity** of the event stream: its name is
//! the type string that bound-task labels embed.
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No persistence**: events are lost if there are no active receivers at send time.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::events::event::TaskEvent;
use crate::sinks::EventSink;

/// Broadcast channel for task lifecycle events.
///
/// Thin wrapper over [`tokio::sync::broadcast`] that provides a
/// `publish`/`subscribe` API plus a stable stream name. Multiple invocations
/// can publish concurrently; receivers observe clones of each event.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct EventBus<P, R, E> {
    name: Arc<str>,
    tx: broadcast::Sender<TaskEvent<P, R, E>>,
}

impl<P, R, E> EventBus<P, R, E>
where
    P: Clone,
    R: Clone,
    E: Clone,
{
    /// Creates a new bus with the given stream name and channel capacity.
    ///
    /// ### Notes
    /// - The name identifies the event stream (it appears in bound-task labels).
    /// - Capacity is **shared** across all receivers (not per-receiver).
    /// - The minimum capacity is 1 (clamped).
    pub fn new(name: impl Into<Arc<str>>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<TaskEvent<P, R, E>>(capacity);
        Self {
            name: name.into(),
            tx,
        }
    }

    /// Returns the stream name this bus was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Publishes an event to all active receivers.
    ///
    /// - Takes ownership of the event; the broadcast channel clones it per receiver.
    /// - If there are no receivers, the event is dropped silently.
    pub fn publish(&self, event: TaskEvent<P, R, E>) {
        let _ = self.tx.send(event);
    }

    /// Creates a new receiver that will observe subsequent events.
    ///
    /// - Each call creates an **independent** receiver.
    /// - A receiver only gets events **sent after** it subscribes.
    /// - Slow receivers get `RecvError::Lagged(n)` and skip over missed items.
    pub fn subscribe(&self) -> broadcast::Receiver<TaskEvent<P, R, E>> {
        self.tx.subscribe()
    }
}

impl<P, R, E> EventSink<P, R, E> for EventBus<P, R, E>
where
    P: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn publish(&self, event: TaskEvent<P, R, E>) {
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_receivers_observe_published_events() {
        let bus: EventBus<u32, &str, &str> = EventBus::new("demo/STREAM", 8);
        let mut rx = bus.subscribe();

        bus.publish(TaskEvent::started(1));
        bus.publish(TaskEvent::succeeded(1, "ok"));

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first, TaskEvent::started(1));
        assert_eq!(second, TaskEvent::succeeded(1, "ok"));
    }

    #[tokio::test]
    async fn test_publish_without_receivers_is_silent() {
        let bus: EventBus<u32, &str, &str> = EventBus::new("demo/STREAM", 8);
        bus.publish(TaskEvent::started(1));

        // A receiver created afterwards only sees later events.
        let mut rx = bus.subscribe();
        bus.publish(TaskEvent::succeeded(1, "ok"));
        assert_eq!(rx.recv().await.unwrap(), TaskEvent::succeeded(1, "ok"));
    }

    #[test]
    fn test_capacity_is_clamped_to_one() {
        // Constructing with zero capacity must not panic.
        let bus: EventBus<u32, &str, &str> = EventBus::new("demo/STREAM", 0);
        assert_eq!(bus.name(), "demo/STREAM");
    }
}
