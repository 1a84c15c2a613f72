//! # Run a worker with a bounded retry budget.
//!
//! Executes up to `attempts` runs of a [`Worker`], pausing for a fixed
//! [`RETRY_PAUSE`] between consecutive failures.
//!
//! - **Execute attempts sequentially** with a child cancellation token each
//! - **Pause between failures** (cancellable wait)
//! - **Propagate the final error verbatim** once the budget is exhausted
//!
//! ## Flow
//!
//! ```text
//! Success:
//!   worker.run() → Ok(v) → return Ok(v)        (remaining budget unused)
//!
//! Failure with budget left:
//!   worker.run() → Err(_) → sleep(RETRY_PAUSE) → next attempt
//!
//! Failure on final attempt:
//!   worker.run() → Err(e) → log exhaustion → return Err(Worker(e))
//!
//! Cancellation during pause:
//!   parent token fires → abort sleep → return Err(Cancelled)
//! ```
//!
//! ## Rules
//! - The budget counts **total executions**, not re-executions
//! - Intermediate errors are dropped; only the **final** error surfaces
//! - No pause after the final attempt
//! - The parent token is only consulted **between** attempts (during the pause)
//! - Each attempt gets a **child token**; cancelling it does not affect the parent

use std::time::Duration;

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::{error::RunError, workers::Worker};

/// Fixed pause between consecutive failed attempts.
///
/// Every retrying binding waits the same 2000ms; there is no per-binding knob.
pub const RETRY_PAUSE: Duration = Duration::from_millis(2000);

/// Executes up to `attempts` runs of `worker`, pausing between failures.
///
/// ### Flow
/// 1. Derive a child cancellation token for the attempt
/// 2. Run the worker once with the invocation's `params`/`args`
/// 3. On success, return immediately; on failure, pause and repeat
/// 4. Once the budget is exhausted, log and return the last error
///
/// ### Cancellation semantics
/// - The pause races `time::sleep(RETRY_PAUSE)` against `parent.cancelled()`;
///   cancellation aborts the remaining wait and yields [`RunError::Cancelled`].
/// - A running attempt is **not** interrupted by this function; the worker
///   observes cancellation through its child token and decides for itself.
///
/// ### Error semantics
/// The worker's final error is returned unchanged inside [`RunError::Worker`].
/// Errors from non-final attempts are dropped without being reported.
pub(crate) async fn run_with_retries<P, A, W>(
    attempts: u32,
    worker: &W,
    parent: &CancellationToken,
    params: P,
    args: A,
) -> Result<W::Output, RunError<W::Error>>
where
    P: Clone + Send,
    A: Clone + Send,
    W: Worker<P, A> + ?Sized,
{
    debug_assert!(attempts >= 1, "retry budget must be at least one attempt");

    let mut attempt: u32 = 1;
    loop {
        let child = parent.child_token();
        match worker.run(child, params.clone(), args.clone()).await {
            Ok(result) => return Ok(result),
            Err(_) if attempt < attempts => {
                pause_between_attempts(parent).await?;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(
                    worker = worker.name(),
                    attempts,
                    "worker failed after final retry attempt"
                );
                return Err(RunError::Worker(e));
            }
        }
    }
}

/// Waits out [`RETRY_PAUSE`], aborting early if the parent token fires.
async fn pause_between_attempts<E>(parent: &CancellationToken) -> Result<(), RunError<E>> {
    select! {
        _ = time::sleep(RETRY_PAUSE) => Ok(()),
        _ = parent.cancelled() => Err(RunError::Cancelled),
    }
}
