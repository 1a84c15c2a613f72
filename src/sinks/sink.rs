//! # Event sink trait.
//!
//! Provides [`EventSink`], the extension point for routing bound-task
//! lifecycle events into application code.
//!
//! Each sink is:
//! - **Shared**: one sink instance serves every task bound through a binder
//! - **Synchronous**: `publish` must not block (invocations call it inline)
//! - **Named**: the sink's name is the stream identity embedded in task labels
//!
//! The common handle type is [`SinkRef`], an `Arc<dyn EventSink>` suitable for
//! sharing between a binder and the code observing its events.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use taskbind::{EventSink, TaskEvent};
//!
//! struct Counter(AtomicUsize);
//!
//! impl EventSink<u32, String, String> for Counter {
//!     fn publish(&self, _event: TaskEvent<u32, String, String>) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//!
//!     fn name(&self) -> &str { "counter" }   // prefer short, descriptive names
//! }
//! ```

use std::sync::Arc;

use crate::events::TaskEvent;

/// Shared handle to an event sink (`Arc<dyn EventSink>`).
pub type SinkRef<P, R, E> = Arc<dyn EventSink<P, R, E>>;

/// Destination for bound-task lifecycle events.
///
/// A sink receives every event emitted by the invocations of every task bound
/// through its binder. The generic parameters fix the payload types: `P` the
/// invocation params, `R` the worker result, `E` the worker error.
///
/// ### Implementation requirements
/// - `publish` is called inline from the invocation; return promptly.
/// - Handle delivery errors internally; do not panic.
/// - `name` should be stable for the sink's lifetime (it appears in labels).
pub trait EventSink<P, R, E>: Send + Sync + 'static {
    /// Delivers a single lifecycle event.
    ///
    /// Called in emission order for any one invocation: `Started` first (when
    /// enabled), then the terminal event, then an optional cancellation report.
    fn publish(&self, event: TaskEvent<P, R, E>);

    /// Returns the sink's stream name, used in logs and bound-task labels.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override
    /// it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
