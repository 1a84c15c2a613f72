//! Error types used by bound-task invocations.
//!
//! This module defines [`RunError`], the terminal outcome of a failed
//! invocation. The worker's own error type is carried as a generic parameter
//! so callers always get their error back unchanged.
//!
//! The type provides helper methods (`as_label`, `is_cancelled`) for
//! logging/metrics and [`RunError::into_worker_error`] for unwrapping.

use thiserror::Error;

/// # Errors produced by a bound-task invocation.
///
/// A bound task either fails because its worker failed (after any configured
/// retries were exhausted) or because the invocation's cancellation token was
/// cancelled before a terminal outcome was reached.
///
/// `Worker` wraps the worker's error **verbatim**: it displays exactly as the
/// inner error does and the value can be recovered with
/// [`into_worker_error`](RunError::into_worker_error).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError<E> {
    /// The worker's final error, propagated unchanged.
    #[error("{0}")]
    Worker(E),

    /// The invocation was cancelled before producing a terminal outcome.
    ///
    /// Raised when cancellation fires while the task is paused between retry
    /// attempts. No `Succeeded`/`Failed` terminal event is emitted for the
    /// invocation; the cancellation guard reports the failure instead.
    #[error("context cancelled")]
    Cancelled,
}

impl<E> RunError<E> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskbind::RunError;
    ///
    /// let err: RunError<&str> = RunError::Worker("boom");
    /// assert_eq!(err.as_label(), "worker_error");
    ///
    /// let err: RunError<&str> = RunError::Cancelled;
    /// assert_eq!(err.as_label(), "run_cancelled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RunError::Worker(_) => "worker_error",
            RunError::Cancelled => "run_cancelled",
        }
    }

    /// Indicates whether the invocation ended due to cancellation.
    ///
    /// # Example
    /// ```
    /// use taskbind::RunError;
    ///
    /// let err: RunError<&str> = RunError::Cancelled;
    /// assert!(err.is_cancelled());
    /// assert!(!RunError::Worker("boom").is_cancelled());
    /// ```
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunError::Cancelled)
    }

    /// Extracts the worker's error, if this is a worker failure.
    ///
    /// # Example
    /// ```
    /// use taskbind::RunError;
    ///
    /// let err: RunError<&str> = RunError::Worker("boom");
    /// assert_eq!(err.into_worker_error(), Some("boom"));
    ///
    /// let err: RunError<&str> = RunError::Cancelled;
    /// assert_eq!(err.into_worker_error(), None);
    /// ```
    pub fn into_worker_error(self) -> Option<E> {
        match self {
            RunError::Worker(e) => Some(e),
            RunError::Cancelled => None,
        }
    }
}
