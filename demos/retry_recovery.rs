//! # Example: retry_recovery
//!
//! Demonstrates how a bound task retries failed runs on a fixed pause
//! until the budget of attempts is spent.
//!
//! The worker fails twice before succeeding. Only the final outcome is
//! announced to the sink; the intermediate failures stay internal.
//!
//! ## Flow
//! ```text
//! BoundTask::run()
//!   ├─► publish(Started{ params })
//!   ├─► attempt 1 ──► Err("boom #1")
//!   ├─► sleep(RETRY_PAUSE)
//!   ├─► attempt 2 ──► Err("boom #2")
//!   ├─► sleep(RETRY_PAUSE)
//!   ├─► attempt 3 ──► Ok("ready")
//!   └─► publish(Succeeded{ params, result })
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example retry_recovery
//! ```

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use taskbind::{BindConfig, Binder, RecordingSink, RetryPolicy, WorkerFn, RETRY_PAUSE};
use tokio_util::sync::CancellationToken;

static FAIL_COUNT: AtomicU64 = AtomicU64::new(0);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("[main] pause between attempts: {RETRY_PAUSE:?}");

    // 1. Record events in memory; a broadcast bus works the same way
    let sink = Arc::new(RecordingSink::new());

    // 2. Budget of three attempts, parsed the way loose config arrives
    let config = BindConfig::default().with_retry(RetryPolicy::parse("3"));
    let binder = Binder::new(sink.clone(), config);

    // 3. Define a worker that fails 2 times before succeeding
    let flaky = binder.bind(WorkerFn::arc(
        "warmCache",
        |_ctx: CancellationToken, _params: (), _args: ()| async move {
            let attempt = FAIL_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
            println!("[warmCache] attempt {attempt}");
            if attempt <= 2 {
                println!("[warmCache] simulated failure #{attempt}");
                Err(format!("boom #{attempt}"))
            } else {
                println!("[warmCache] success on attempt {attempt}");
                Ok("ready".to_string())
            }
        },
    ));

    // 4. Run; the two failures are retried internally
    let outcome = flaky.run(CancellationToken::new(), (), ()).await?;
    println!("[main] outcome: {outcome}");

    // 5. The sink saw only the final story
    println!("[main] events seen: {:?}", sink.kinds());
    Ok(())
}
