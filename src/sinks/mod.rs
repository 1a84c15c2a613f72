//! # Event sinks for bound-task lifecycles.
//!
//! This module provides the [`EventSink`] trait and built-in implementations
//! for consuming the events that bound-task invocations publish.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   BoundTask::run() ── publish(TaskEvent) ──► EventSink
//!                                                 │
//!                                       ┌─────────┼───────────┐
//!                                       ▼         ▼           ▼
//!                                    EventBus  RecordingSink  LogSink
//!                                   (broadcast) (test log)   (tracing)
//! ```
//!
//! ## Sink types
//! - **Fan-out sinks** - forward events to live consumers ([`EventBus`](crate::EventBus))
//! - **Capturing sinks** - keep events for later inspection ([`RecordingSink`])
//!
//! A binder holds exactly one sink; tasks bound through it never publish
//! anywhere else.

mod recording;
mod sink;

#[cfg(feature = "logging")]
mod log;

pub use recording::RecordingSink;
pub use sink::{EventSink, SinkRef};

#[cfg(feature = "logging")]
pub use log::LogSink;
