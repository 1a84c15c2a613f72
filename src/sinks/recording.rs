//! # In-memory recording sink.
//!
//! [`RecordingSink`] stores every published event in order. It exists for
//! tests and short-lived tooling that asserts on an invocation's event
//! sequence after the fact.

use std::sync::{Mutex, MutexGuard};

use crate::events::{EventKind, TaskEvent};
use crate::sinks::sink::EventSink;

/// Sink that appends every event to an in-memory log.
///
/// Events are stored in publish order, which for a single invocation is the
/// lifecycle order (`Started`, terminal, cancellation report). Lock poisoning
/// is ignored; the sink keeps recording after a panicking reader.
///
/// ## Example
/// ```rust
/// use taskbind::{EventKind, RecordingSink, EventSink, TaskEvent};
///
/// let sink: RecordingSink<u32, &str, &str> = RecordingSink::new();
/// sink.publish(TaskEvent::started(1));
/// sink.publish(TaskEvent::succeeded(1, "ok"));
///
/// assert_eq!(sink.kinds(), [EventKind::Started, EventKind::Succeeded]);
/// ```
#[derive(Debug)]
pub struct RecordingSink<P, R, E> {
    events: Mutex<Vec<TaskEvent<P, R, E>>>,
}

impl<P, R, E> Default for RecordingSink<P, R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, R, E> RecordingSink<P, R, E> {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Returns the kinds of all recorded events, in publish order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.lock().iter().map(TaskEvent::kind).collect()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Indicates whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns all recorded events, in publish order.
    pub fn take(&self) -> Vec<TaskEvent<P, R, E>> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TaskEvent<P, R, E>>> {
        match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<P: Clone, R: Clone, E: Clone> RecordingSink<P, R, E> {
    /// Returns a snapshot of all recorded events, in publish order.
    pub fn events(&self) -> Vec<TaskEvent<P, R, E>> {
        self.lock().clone()
    }
}

impl<P, R, E> EventSink<P, R, E> for RecordingSink<P, R, E>
where
    P: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    fn publish(&self, event: TaskEvent<P, R, E>) {
        self.lock().push(event);
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::FailureReason;

    #[test]
    fn test_records_in_publish_order() {
        let sink: RecordingSink<u32, &str, &str> = RecordingSink::new();
        sink.publish(TaskEvent::started(1));
        sink.publish(TaskEvent::failed(1, FailureReason::Error("boom")));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.kinds(), [EventKind::Started, EventKind::Failed]);
        assert_eq!(
            sink.events(),
            [
                TaskEvent::started(1),
                TaskEvent::failed(1, FailureReason::Error("boom")),
            ]
        );
    }

    #[test]
    fn test_take_drains_the_log() {
        let sink: RecordingSink<u32, &str, &str> = RecordingSink::new();
        sink.publish(TaskEvent::started(1));

        let drained = sink.take();
        assert_eq!(drained.len(), 1);
        assert!(sink.is_empty());
    }
}
