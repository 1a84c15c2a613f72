//! # Worker abstractions.
//!
//! This module provides the work-side types of the crate:
//! - [`Worker`] - trait for implementing async cancelable workers
//! - [`WorkerFn`] - function-based worker implementation
//! - [`WorkerRef`] - shared reference to a worker (`Arc<dyn Worker>`)

mod worker;
mod worker_fn;

pub use worker::{Worker, WorkerRef};
pub use worker_fn::WorkerFn;
