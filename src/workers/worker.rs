//! # Worker abstraction.
//!
//! This module defines the [`Worker`] trait (async, cancelable, typed) and the
//! common handle type [`WorkerRef`], an `Arc<dyn Worker>` suitable for sharing
//! with the binding machinery.
//!
//! A worker receives a [`CancellationToken`] scoped to the current attempt and
//! should periodically check it to stop cooperatively.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Shared handle to a worker (`Arc<dyn Worker>`).
pub type WorkerRef<P, A, R, E> = Arc<dyn Worker<P, A, Output = R, Error = E>>;

/// # Asynchronous, cancelable unit of work.
///
/// A `Worker` has a stable [`name`](Worker::name) and an async
/// [`run`](Worker::run) method that receives a per-attempt
/// [`CancellationToken`] plus the invocation's `params` and `args`.
///
/// `params` is the payload echoed on every lifecycle event; `args` carries
/// call-site extras that never appear in events. Use `()` when there are none,
/// or a tuple for several.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tokio_util::sync::CancellationToken;
/// use async_trait::async_trait;
/// use taskbind::{Worker, WorkerRef};
///
/// struct FetchUser;
///
/// #[async_trait]
/// impl Worker<u64, ()> for FetchUser {
///     type Output = String;
///     type Error = String;
///
///     fn name(&self) -> &str { "fetchUser" }
///
///     async fn run(&self, ctx: CancellationToken, id: u64, _args: ()) -> Result<String, String> {
///         if ctx.is_cancelled() {
///             return Err("shutting down".into());
///         }
///         Ok(format!("user-{id}"))
///     }
/// }
///
/// let worker: WorkerRef<u64, (), String, String> = Arc::new(FetchUser);
/// assert_eq!(worker.name(), "fetchUser");
/// ```
#[async_trait]
pub trait Worker<P, A>: Send + Sync + 'static {
    /// The success value produced by one execution.
    type Output: Send;

    /// The error type raised by a failed execution.
    type Error: Send;

    /// Returns a stable, human-readable worker name.
    ///
    /// The name is embedded in bound-task labels and retry diagnostics.
    fn name(&self) -> &str;

    /// Executes the worker until completion or cancellation.
    ///
    /// The token is scoped to this attempt; implementations should check
    /// `ctx.is_cancelled()` at natural pause points and exit promptly.
    async fn run(
        &self,
        ctx: CancellationToken,
        params: P,
        args: A,
    ) -> Result<Self::Output, Self::Error>;
}
