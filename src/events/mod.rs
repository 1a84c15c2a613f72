//! Lifecycle events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to lifecycle events emitted by bound-task invocations.
//!
//! ## Contents
//! - [`EventKind`], [`TaskEvent`], [`FailureReason`] event classification and payloads
//! - [`EventBus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: every `BoundTask` invocation (via its binder's sink).
//! - **Consumers**: application code holding `EventBus::subscribe()` receivers.

mod bus;
mod event;

pub use bus::EventBus;
pub use event::{EventKind, FailureReason, TaskEvent};
