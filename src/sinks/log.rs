//! # Tracing-backed logging sink.
//!
//! [`LogSink`] emits events through [`tracing`] in a human-readable form.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output shape
//! ```text
//! INFO  task started params=...
//! INFO  task succeeded params=... result=...
//! ERROR task failed params=... error=...
//! ```
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use taskbind::{BindConfig, Binder, LogSink};
//!
//! let binder: Binder<String, u32, String> =
//!     Binder::new(Arc::new(LogSink::default()), BindConfig::default());
//! // every bound task now logs its lifecycle
//! ```

use std::fmt;

use crate::events::{FailureReason, TaskEvent};
use crate::sinks::sink::EventSink;

/// Simple tracing-based sink.
///
/// Enabled via the `logging` feature. Emits one log record per lifecycle
/// event: `Started` and `Succeeded` at info level, `Failed` at error level
/// (warn level for cancellation reports).
///
/// Not intended for production use - implement a custom [`EventSink`] for
/// structured event handling or metrics collection.
#[derive(Debug, Default)]
pub struct LogSink;

impl<P, R, E> EventSink<P, R, E> for LogSink
where
    P: fmt::Debug,
    R: fmt::Debug,
    E: fmt::Display,
{
    fn publish(&self, event: TaskEvent<P, R, E>) {
        match event {
            TaskEvent::Started { params } => {
                tracing::info!(params = ?params, "task started");
            }
            TaskEvent::Succeeded { params, result } => {
                tracing::info!(params = ?params, result = ?result, "task succeeded");
            }
            TaskEvent::Failed {
                params,
                error: FailureReason::Cancelled,
            } => {
                tracing::warn!(params = ?params, "task cancelled");
            }
            TaskEvent::Failed { params, error } => {
                tracing::error!(params = ?params, error = %error, "task failed");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
