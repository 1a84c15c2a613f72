//! # Example: custom_sink
//!
//! Demonstrates how to build and attach a custom event sink.
//!
//! Shows how to:
//! - Implement the [`EventSink`] trait.
//! - Inspect [`TaskEvent`] / [`FailureReason`] for lifecycle reporting.
//! - Watch the cancellation guard add its own failure report.
//!
//! ## Flow
//! ```text
//! BoundTask::run(ctx)
//!     ├─► publish(Started)         ──► ConsoleSink.publish()
//!     ├─► worker sees ctx cancel, finishes ──► Ok("drained N")
//!     ├─► publish(Succeeded)       ──► ConsoleSink.publish()
//!     └─► guard: ctx cancelled     ──► publish(Failed{ cancelled })
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example custom_sink
//! ```

use std::sync::Arc;
use std::time::Duration;

use taskbind::{BindConfig, Binder, EventSink, FailureReason, TaskEvent, WorkerFn};
use tokio_util::sync::CancellationToken;

/// A simple console sink that prints every event it receives.
/// In real life, you could export metrics, ship logs, or trigger alerts.
struct ConsoleSink;

impl EventSink<String, String, String> for ConsoleSink {
    fn publish(&self, event: TaskEvent<String, String, String>) {
        match event {
            TaskEvent::Started { params } => {
                println!("[sink] started:   job={params}");
            }
            TaskEvent::Succeeded { params, result } => {
                println!("[sink] succeeded: job={params} result={result}");
            }
            TaskEvent::Failed { params, error } => match error {
                FailureReason::Cancelled => {
                    println!("[sink] cancelled: job={params}");
                }
                FailureReason::Error(reason) => {
                    println!("[sink] failed:    job={params} reason={reason}");
                }
            },
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Attach the custom sink
    let binder = Binder::new(Arc::new(ConsoleSink), BindConfig::default());

    // 2. Worker drains a queue until told to stop, then reports what it managed
    let drain = binder.bind(WorkerFn::arc(
        "drainQueue",
        |ctx: CancellationToken, job: String, _args: ()| async move {
            let mut drained = 0u32;
            loop {
                if ctx.is_cancelled() {
                    println!("[drainQueue] {job}: stopping after {drained} items");
                    return Ok::<String, String>(format!("drained {drained}"));
                }
                drained += 1;
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        },
    ));

    // 3. Cancel the invocation shortly after it starts
    let token = CancellationToken::new();
    let canceller = {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(350)).await;
            println!("[main] cancelling");
            token.cancel();
        })
    };

    // The worker finishes cleanly, so the run still succeeds; the guard
    // reports the cancellation as an extra Failed event.
    let outcome = drain.run(token, "emails".to_string(), ()).await?;
    println!("[main] outcome: {outcome}");

    canceller.await?;
    Ok(())
}
