//! Execution core: binding and the invocation lifecycle.
//!
//! This module contains the machinery behind [`Binder::bind`]. The public API
//! from this module is [`Binder`], the [`BoundTask`] handles it produces, and
//! the [`RETRY_PAUSE`] constant.
//!
//! Internal modules:
//! - [`binder`]: attaches workers to a shared sink and labels the result;
//! - [`bound`]: runs one invocation with event publishing and a cancellation guard;
//! - [`retry`]: drives fixed-pause retry attempts under a cancellation token.

mod binder;
mod bound;
mod retry;

pub use binder::Binder;
pub use bound::BoundTask;
pub use retry::RETRY_PAUSE;
