//! # taskbind
//!
//! **Taskbind** is a lightweight task-binding library for Rust.
//!
//! It wraps async workers into bound tasks that announce their lifecycle to
//! an event sink, retry transient failures on a fixed pause, and report
//! cancellation. The crate is designed as a building block for request
//! dispatchers and background-job layers.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │    Worker    │   │    Worker    │   │    Worker    │
//!     │ (async #1)   │   │ (async #2)   │   │ (async #3)   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Binder (shared sink + shared config)                             │
//! │  - EventSink (destination for lifecycle events)                   │
//! │  - BindConfig (announcement switch, retry budget)                 │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  BoundTask   │   │  BoundTask   │   │  BoundTask   │
//!     │ (retry loop) │   │ (retry loop) │   │ (retry loop) │
//!     └┬─────────────┘   └┬─────────────┘   └┬─────────────┘
//!      │                  │                  │
//!      │ Publishes        │ Publishes        │ Publishes
//!      │ Events:          │ Events:          │ Events:
//!      │ - Started        │ - Started        │ - Started
//!      │ - Succeeded      │ - Failed         │ - Succeeded
//!      │                  │                  │ - Failed
//!      ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        EventSink (shared)                         │
//! │        e.g. EventBus (broadcast fan-out) or RecordingSink         │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! Worker ──► Binder::bind() ──► BoundTask ──► BoundTask::run(ctx, params, args)
//!
//! run:
//!   ├─► publish Started{ params }            (unless skip_started)
//!   │
//!   ├─► execute:
//!   │     ├─ no usable retry budget ──► single attempt on a child token
//!   │     └─ budget of N attempts   ──► loop {
//!   │           ├─► worker.run(child_token, params, args)
//!   │           ├─ Ok  ──► break
//!   │           └─ Err ──► attempts left? sleep RETRY_PAUSE (cancellable) ─► retry
//!   │                      none left?     keep the final error
//!   │        }
//!   │
//!   ├─► publish terminal event:
//!   │     ├─ Ok(result)      ──► Succeeded{ params, result }
//!   │     ├─ Err(worker err) ──► Failed{ params, error }
//!   │     └─ cancelled pause ──► (none)
//!   │
//!   └─► cancellation guard:
//!         ctx.is_cancelled() ──► publish Failed{ params, "cancelled" }
//!         (runs on every exit path, even after Succeeded)
//! ```
//!
//! ## Features
//! | Area              | Description                                                       | Key types / traits                            |
//! |-------------------|-------------------------------------------------------------------|-----------------------------------------------|
//! | **Binding**       | Wrap workers into bound tasks sharing one sink and one config.    | [`Binder`], [`BoundTask`]                     |
//! | **Workers**       | Define work as async closures or hand-written implementations.    | [`Worker`], [`WorkerFn`], [`WorkerRef`]       |
//! | **Events**        | Lifecycle announcements carrying params, results, failure reasons.| [`TaskEvent`], [`EventKind`], [`FailureReason`]|
//! | **Sinks**         | Route events to broadcast streams or in-memory recorders.         | [`EventSink`], [`EventBus`], [`RecordingSink`]|
//! | **Retries**       | Fixed-pause retry budgets, parsed from loose input.               | [`RetryPolicy`], [`RETRY_PAUSE`]              |
//! | **Errors**        | Typed invocation outcome: worker error or cancellation.           | [`RunError`]                                  |
//! | **Configuration** | Centralize binding settings.                                      | [`BindConfig`]                                |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogSink`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use taskbind::{BindConfig, Binder, EventBus, RetryPolicy, TaskEvent, WorkerFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Route lifecycle events through a broadcast stream.
//!     let bus = EventBus::new("math/PARSE", 16);
//!     let mut events = bus.subscribe();
//!
//!     let config = BindConfig::default().with_retry(RetryPolicy::parse("3"));
//!     let binder = Binder::new(Arc::new(bus), config);
//!
//!     // Bind an async closure; any Worker implementation works the same way.
//!     let parse = binder.bind(WorkerFn::arc(
//!         "parseNumber",
//!         |_ctx: CancellationToken, raw: String, _args: ()| async move {
//!             raw.trim().parse::<u32>()
//!         },
//!     ));
//!     assert_eq!(parse.name(), "boundParseNumber(math/PARSE)");
//!
//!     let value = parse.run(CancellationToken::new(), "  42  ".into(), ()).await?;
//!     assert_eq!(value, 42);
//!
//!     assert_eq!(events.recv().await?, TaskEvent::started("  42  ".to_string()));
//!     assert_eq!(events.recv().await?, TaskEvent::succeeded("  42  ".to_string(), 42));
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod events;
mod sinks;
mod workers;

// ---- Public re-exports ----

pub use config::{BindConfig, RetryPolicy};
pub use crate::core::{Binder, BoundTask, RETRY_PAUSE};
pub use error::RunError;
pub use events::{EventBus, EventKind, FailureReason, TaskEvent};
pub use sinks::{EventSink, RecordingSink, SinkRef};
pub use workers::{Worker, WorkerFn, WorkerRef};

// Optional: expose a simple built-in tracing sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use sinks::LogSink;
