//! # Lifecycle events emitted by bound tasks.
//!
//! The [`EventKind`] enum classifies event types across the invocation flow:
//! - **Start event**: the invocation announced itself (`Started`)
//! - **Terminal events**: the outcome of execution (`Succeeded`, `Failed`)
//!
//! The [`TaskEvent`] enum carries the payload for each kind: the invocation's
//! params on every event, plus the worker's result or failure reason on the
//! terminal ones. Payloads are delivered **verbatim**; nothing is reworded or
//! wrapped.
//!
//! ## Ordering guarantees
//! Events published by a single invocation arrive in emission order:
//! `Started` (unless suppressed) strictly precedes the terminal event, and a
//! cancellation report always comes last. Events from concurrent invocations
//! of the same task may interleave arbitrarily.
//!
//! ## Cancellation reporting
//! A cancelled invocation is reported as `Failed` with
//! [`FailureReason::Cancelled`]. When cancellation is observed *after* the
//! worker already succeeded, the `Failed` report is emitted **in addition to**
//! `Succeeded`; consumers that treat `Failed` as authoritative will see the
//! invocation as failed.
//!
//! ## Example
//! ```rust
//! use taskbind::{EventKind, FailureReason, TaskEvent};
//!
//! let ev: TaskEvent<&str, u32, &str> = TaskEvent::succeeded("job-7", 42);
//! assert_eq!(ev.kind(), EventKind::Succeeded);
//! assert_eq!(ev.params(), &"job-7");
//!
//! let ev: TaskEvent<&str, u32, &str> = TaskEvent::failed("job-7", FailureReason::Cancelled);
//! assert!(ev.is_cancellation());
//! assert_eq!(ev.kind().as_str(), "failed");
//! ```

use std::fmt;

/// Classification of bound-task lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The invocation has started.
    ///
    /// Emitted before the first worker attempt, unless the binding was
    /// configured to skip it.
    Started,

    /// The worker produced a result.
    ///
    /// Emitted at most once per invocation, after the attempt that succeeded.
    Succeeded,

    /// The worker failed, or the invocation was cancelled.
    ///
    /// Emitted after retry exhaustion, after a single failed run, or by the
    /// cancellation guard (possibly in addition to `Succeeded`).
    Failed,
}

impl EventKind {
    /// Returns a short stable label for use in logs/metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Started => "started",
            EventKind::Succeeded => "succeeded",
            EventKind::Failed => "failed",
        }
    }
}

/// Why a `Failed` event was emitted.
///
/// Distinguishes a worker error (carried verbatim) from an external
/// cancellation of the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason<E> {
    /// The error raised by the worker, unchanged.
    Error(E),
    /// The invocation's cancellation token was cancelled.
    Cancelled,
}

impl<E> FailureReason<E> {
    /// Indicates whether this failure is a cancellation report.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FailureReason::Cancelled)
    }

    /// Returns the worker error, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            FailureReason::Error(e) => Some(e),
            FailureReason::Cancelled => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for FailureReason<E> {
    /// Renders the worker error verbatim, or the literal `cancelled`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Error(e) => e.fmt(f),
            FailureReason::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Lifecycle event with its payload.
///
/// - `P`: the invocation's params, echoed on every event
/// - `R`: the worker's success result
/// - `E`: the worker's error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent<P, R, E> {
    /// Work has started for this invocation.
    ///
    /// Carries:
    /// - `params`: the invocation's params
    Started {
        /// Params supplied to the invocation.
        params: P,
    },

    /// The worker completed successfully.
    ///
    /// Carries:
    /// - `params`: the invocation's params
    /// - `result`: the worker's return value, unchanged
    Succeeded {
        /// Params supplied to the invocation.
        params: P,
        /// The worker's result.
        result: R,
    },

    /// The worker failed or the invocation was cancelled.
    ///
    /// Carries:
    /// - `params`: the invocation's params
    /// - `error`: the failure reason (worker error verbatim, or `Cancelled`)
    Failed {
        /// Params supplied to the invocation.
        params: P,
        /// Why the invocation is reported as failed.
        error: FailureReason<E>,
    },
}

impl<P, R, E> TaskEvent<P, R, E> {
    /// Creates a `Started` event.
    #[inline]
    pub fn started(params: P) -> Self {
        TaskEvent::Started { params }
    }

    /// Creates a `Succeeded` event carrying the worker's result.
    #[inline]
    pub fn succeeded(params: P, result: R) -> Self {
        TaskEvent::Succeeded { params, result }
    }

    /// Creates a `Failed` event carrying the failure reason.
    #[inline]
    pub fn failed(params: P, error: FailureReason<E>) -> Self {
        TaskEvent::Failed { params, error }
    }

    /// Returns the event's classification.
    pub fn kind(&self) -> EventKind {
        match self {
            TaskEvent::Started { .. } => EventKind::Started,
            TaskEvent::Succeeded { .. } => EventKind::Succeeded,
            TaskEvent::Failed { .. } => EventKind::Failed,
        }
    }

    /// Returns the params echoed by this event.
    pub fn params(&self) -> &P {
        match self {
            TaskEvent::Started { params } => params,
            TaskEvent::Succeeded { params, .. } => params,
            TaskEvent::Failed { params, .. } => params,
        }
    }

    /// Indicates whether this is a cancellation report.
    #[inline]
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            TaskEvent::Failed {
                error: FailureReason::Cancelled,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let started: TaskEvent<u32, &str, &str> = TaskEvent::started(1);
        let succeeded: TaskEvent<u32, &str, &str> = TaskEvent::succeeded(1, "ok");
        let failed: TaskEvent<u32, &str, &str> = TaskEvent::failed(1, FailureReason::Error("no"));

        assert_eq!(started.kind(), EventKind::Started);
        assert_eq!(succeeded.kind(), EventKind::Succeeded);
        assert_eq!(failed.kind(), EventKind::Failed);
    }

    #[test]
    fn test_params_echoed_on_every_event() {
        let events: [TaskEvent<u32, &str, &str>; 3] = [
            TaskEvent::started(7),
            TaskEvent::succeeded(7, "ok"),
            TaskEvent::failed(7, FailureReason::Cancelled),
        ];
        for ev in &events {
            assert_eq!(ev.params(), &7);
        }
    }

    #[test]
    fn test_cancellation_report_detection() {
        let cancelled: TaskEvent<u32, &str, &str> = TaskEvent::failed(1, FailureReason::Cancelled);
        let worker_err: TaskEvent<u32, &str, &str> =
            TaskEvent::failed(1, FailureReason::Error("boom"));

        assert!(cancelled.is_cancellation());
        assert!(!worker_err.is_cancellation());
    }

    #[test]
    fn test_failure_reason_displays_verbatim() {
        let reason: FailureReason<&str> = FailureReason::Error("connection refused");
        assert_eq!(reason.to_string(), "connection refused");

        let reason: FailureReason<&str> = FailureReason::Cancelled;
        assert_eq!(reason.to_string(), "cancelled");
    }

    #[test]
    fn test_failure_reason_exposes_worker_error() {
        let reason: FailureReason<&str> = FailureReason::Error("boom");
        assert_eq!(reason.error(), Some(&"boom"));

        let reason: FailureReason<&str> = FailureReason::Cancelled;
        assert_eq!(reason.error(), None);
    }
}
