//! # Bound task: one worker wired to one sink.
//!
//! A [`BoundTask`] executes its worker and publishes the invocation's
//! lifecycle to the binder's sink. Every invocation walks the same state
//! machine:
//!
//! ```text
//! run(ctx, params, args):
//!   ├─► publish Started{params}              (unless skip_started)
//!   ├─► execute:
//!   │     usable retry budget ──► run_with_retries(attempts, ...)
//!   │     otherwise           ──► single worker.run(child token, ...)
//!   ├─► publish terminal event:
//!   │     Ok(result)          ──► Succeeded{params, result}
//!   │     Err(Worker(e))      ──► Failed{params, error: e}
//!   │     Err(Cancelled)      ──► (no terminal event)
//!   ├─► cancellation guard:
//!   │     ctx.is_cancelled()  ──► publish Failed{params, cancelled}
//!   └─► return outcome
//! ```
//!
//! ## Rules
//! - Per invocation, at most one `Started`, at most one terminal event
//! - `Started` strictly precedes the terminal event; the guard's report comes last
//! - The guard runs on **every** exit path, even after `Succeeded`
//!   (a cancelled-after-success invocation publishes **both**)
//! - Cancellation observed during a retry pause suppresses the terminal event;
//!   the guard's `Failed` is the invocation's only failure report
//! - Concurrent invocations of one task are independent; they share only the sink

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::BindConfig;
use crate::core::retry::run_with_retries;
use crate::error::RunError;
use crate::events::{FailureReason, TaskEvent};
use crate::sinks::SinkRef;
use crate::workers::WorkerRef;

/// A worker bound to a sink, ready to be invoked.
///
/// Produced by [`Binder::bind`](crate::Binder::bind). The task is stateless
/// between invocations: it holds only the worker, the sink, the shared config,
/// and a diagnostic label. Cloning is cheap and clones share everything.
pub struct BoundTask<P, A, R, E> {
    label: Arc<str>,
    worker: WorkerRef<P, A, R, E>,
    sink: SinkRef<P, R, E>,
    config: BindConfig,
}

impl<P, A, R, E> BoundTask<P, A, R, E> {
    pub(crate) fn new(
        label: String,
        worker: WorkerRef<P, A, R, E>,
        sink: SinkRef<P, R, E>,
        config: BindConfig,
    ) -> Self {
        Self {
            label: label.into(),
            worker,
            sink,
            config,
        }
    }

    /// Returns the diagnostic label, `bound<Worker>(<sink>)`.
    pub fn name(&self) -> &str {
        &self.label
    }

    /// Returns the config this task runs under.
    #[inline]
    pub fn config(&self) -> BindConfig {
        self.config
    }
}

impl<P, A, R, E> Clone for BoundTask<P, A, R, E> {
    fn clone(&self) -> Self {
        Self {
            label: Arc::clone(&self.label),
            worker: Arc::clone(&self.worker),
            sink: Arc::clone(&self.sink),
            config: self.config,
        }
    }
}

impl<P, A, R, E> BoundTask<P, A, R, E>
where
    P: Clone + Send + 'static,
    A: Clone + Send + 'static,
    R: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Runs one invocation to completion and returns the worker's outcome.
    ///
    /// ### Flow
    /// 1. Publish `Started` (skipped when the config says so)
    /// 2. Execute the worker, through the retry executor when the budget is usable
    /// 3. Publish the terminal event matching the outcome
    /// 4. Run the cancellation guard
    ///
    /// ### Cancellation semantics
    /// - `ctx` is the invocation's parent token; each worker attempt receives
    ///   a **child** of it, so a worker cancelling its own token never trips
    ///   the guard.
    /// - Cancellation during a retry pause aborts the invocation with
    ///   [`RunError::Cancelled`] and publishes no terminal event.
    /// - The guard checks `ctx` once, after execution: if the token is
    ///   cancelled by then, a `Failed` report with the cancellation reason is
    ///   published **in addition to** whatever terminal event was emitted.
    ///
    /// ### Return value
    /// The worker's result or final error, unchanged. A cancelled-after-success
    /// invocation still returns `Ok`; the extra `Failed` event only affects
    /// observers.
    pub async fn run(&self, ctx: CancellationToken, params: P, args: A) -> Result<R, RunError<E>> {
        if !self.config.skip_started {
            self.publish_started(&params);
        }

        let outcome = match self.config.retry.usable_attempts() {
            Some(attempts) => {
                run_with_retries(attempts, self.worker.as_ref(), &ctx, params.clone(), args).await
            }
            None => self
                .worker
                .run(ctx.child_token(), params.clone(), args)
                .await
                .map_err(RunError::Worker),
        };

        match &outcome {
            Ok(result) => self.publish_succeeded(&params, result),
            Err(RunError::Worker(error)) => {
                self.publish_failed(&params, FailureReason::Error(error.clone()))
            }
            Err(RunError::Cancelled) => {}
        }

        self.report_cancellation(&ctx, &params);
        outcome
    }

    /// Publishes `Started` with the invocation's params.
    fn publish_started(&self, params: &P) {
        self.sink.publish(TaskEvent::started(params.clone()));
    }

    /// Publishes `Succeeded` carrying the worker's result.
    fn publish_succeeded(&self, params: &P, result: &R) {
        self.sink
            .publish(TaskEvent::succeeded(params.clone(), result.clone()));
    }

    /// Publishes `Failed` with the given reason.
    fn publish_failed(&self, params: &P, error: FailureReason<E>) {
        self.sink.publish(TaskEvent::failed(params.clone(), error));
    }

    /// Publishes the cancellation report if the invocation's token fired.
    ///
    /// Runs unconditionally as the final step, so the report lands after any
    /// terminal event already published for this invocation.
    fn report_cancellation(&self, ctx: &CancellationToken, params: &P) {
        if ctx.is_cancelled() {
            self.publish_failed(params, FailureReason::Cancelled);
        }
    }
}
