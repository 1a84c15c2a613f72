//! # Function-backed worker (`WorkerFn`)
//!
//! [`WorkerFn`] wraps a closure `F: Fn(CancellationToken, P, A) -> Fut`,
//! producing a fresh future per execution. This avoids shared mutable state:
//! every retry attempt gets a future that owns its own state.
//!
//! ## Concurrency semantics
//! - Each call to [`Worker::run`] creates a **new** future.
//! - No hidden mutation between attempts; when shared state is needed, move an
//!   `Arc<...>` into the closure explicitly.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use taskbind::{Worker, WorkerFn, WorkerRef};
//!
//! let w: WorkerRef<u64, (), String, String> =
//!     WorkerFn::arc("fetchUser", |_ctx: CancellationToken, id: u64, _args: ()| async move {
//!         Ok::<String, String>(format!("user-{id}"))
//!     });
//!
//! assert_eq!(w.name(), "fetchUser");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::workers::worker::Worker;

/// Function-backed worker implementation.
///
/// Wraps a closure that *creates* a new future per execution.
#[derive(Debug)]
pub struct WorkerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> WorkerFn<F> {
    /// Creates a new function-backed worker.
    ///
    /// Prefer [`WorkerFn::arc`] when you immediately need a [`WorkerRef`](crate::WorkerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the worker and returns it as a shared handle (`Arc<Self>`).
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<P, A, R, E, F, Fut> Worker<P, A> for WorkerFn<F>
where
    P: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    F: Fn(CancellationToken, P, A) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    type Output = R;
    type Error = E;

    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, ctx: CancellationToken, params: P, args: A) -> Result<R, E> {
        (self.f)(ctx, params, args).await
    }
}
