//! # Example: basic_bind
//!
//! Minimal example of binding a single async worker to an event stream.
//!
//! Demonstrates how to:
//! - Define a worker using [`WorkerFn`].
//! - Bind it with [`Binder::bind`] and run the bound task.
//! - Watch lifecycle events arrive on an [`EventBus`].
//!
//! ## Flow
//! ```text
//! WorkerFn ──► Binder::bind() ──► BoundTask::run()
//!     ├─► publish(Started{ params })
//!     ├─► worker runs ──► Ok(result)
//!     └─► publish(Succeeded{ params, result })
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_bind
//! ```

use std::sync::Arc;

use taskbind::{BindConfig, Binder, EventBus, TaskEvent, WorkerFn};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create the event stream and subscribe before running anything
    let bus: EventBus<u64, String, String> = EventBus::new("user/FETCH", 16);
    let mut events = bus.subscribe();

    // 2. Bind a worker to the stream (defaults: announce Started, no retries)
    let binder = Binder::new(Arc::new(bus), BindConfig::default());
    let fetch = binder.bind(WorkerFn::arc(
        "fetchUser",
        |_ctx: CancellationToken, id: u64, _args: ()| async move {
            println!("[fetchUser] looking up user {id}");
            Ok::<String, String>(format!("user-{id}"))
        },
    ));
    println!("[main] bound task: {}", fetch.name());

    // 3. Print events as they arrive
    let printer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                TaskEvent::Started { params } => println!("[events] started: id={params}"),
                TaskEvent::Succeeded { params, result } => {
                    println!("[events] succeeded: id={params} result={result}")
                }
                TaskEvent::Failed { params, error } => {
                    println!("[events] failed: id={params} error={error}")
                }
            }
        }
    });

    // 4. Run one invocation
    let user = fetch.run(CancellationToken::new(), 7, ()).await?;
    println!("[main] got {user}");

    // 5. Drop every handle to the stream so the printer sees it close
    drop(binder);
    drop(fetch);
    printer.await?;

    println!("[main] done.");
    Ok(())
}
