//! # Binder: pairs an event sink with a binding configuration.
//!
//! A [`Binder`] is the factory for bound tasks. It owns the sink every bound
//! task publishes to and the [`BindConfig`] they all share; binding a worker
//! is cheap and can be repeated for any number of workers.
//!
//! ```text
//! Binder { sink, config }
//!   ├── bind(worker A) ──► BoundTask "boundWorkerA(<sink name>)"
//!   ├── bind(worker B) ──► BoundTask "boundWorkerB(<sink name>)"
//!   └── bind(worker C) ──► BoundTask "boundWorkerC(<sink name>)"
//! ```
//!
//! Binding performs no validation: an unusable retry budget still yields a
//! working (single-run) task. The config is inspected per invocation.

use std::sync::Arc;

use crate::config::BindConfig;
use crate::core::bound::BoundTask;
use crate::sinks::SinkRef;
use crate::workers::WorkerRef;

/// Factory for bound tasks sharing one sink and one config.
///
/// The generic parameters fix the event payload types for every task bound
/// through this binder: `P` the invocation params, `R` the worker result,
/// `E` the worker error.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use tokio_util::sync::CancellationToken;
/// use taskbind::{BindConfig, Binder, RecordingSink, WorkerFn};
///
/// let sink = Arc::new(RecordingSink::<u32, u32, String>::new());
/// let binder = Binder::new(sink.clone(), BindConfig::default());
///
/// let double = binder.bind(WorkerFn::arc(
///     "double",
///     |_ctx: CancellationToken, n: u32, _args: ()| async move { Ok::<u32, String>(n * 2) },
/// ));
///
/// assert_eq!(double.name(), "boundDouble(recording)");
/// ```
pub struct Binder<P, R, E> {
    sink: SinkRef<P, R, E>,
    config: BindConfig,
}

impl<P, R, E> Binder<P, R, E>
where
    P: 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    /// Creates a binder publishing to `sink` with the given config.
    pub fn new(sink: SinkRef<P, R, E>, config: BindConfig) -> Self {
        Self { sink, config }
    }

    /// Returns the config applied to every task bound through this binder.
    #[inline]
    pub fn config(&self) -> BindConfig {
        self.config
    }

    /// Binds a worker, producing a runnable [`BoundTask`].
    ///
    /// The task's label combines the worker's name (first letter upper-cased)
    /// with the sink's stream name: `bound<Worker>(<sink>)`. The worker itself
    /// is never renamed.
    pub fn bind<A>(&self, worker: WorkerRef<P, A, R, E>) -> BoundTask<P, A, R, E>
    where
        A: 'static,
    {
        let label = bound_label(worker.name(), self.sink.name());
        BoundTask::new(label, worker, Arc::clone(&self.sink), self.config)
    }
}

/// Builds the diagnostic label `bound<Worker>(<sink>)`.
///
/// Only the first character of the worker name is upper-cased; the rest is
/// kept as-is. An empty worker name yields `bound(<sink>)`.
fn bound_label(worker: &str, sink: &str) -> String {
    let mut chars = worker.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("bound{capitalized}({sink})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tokio_util::sync::CancellationToken;

    use crate::events::EventBus;
    use crate::sinks::RecordingSink;
    use crate::workers::WorkerFn;

    fn noop_worker(name: &'static str) -> WorkerRef<u32, (), u32, String> {
        WorkerFn::arc(name, |_ctx: CancellationToken, n: u32, _args: ()| async move {
            Ok::<u32, String>(n)
        })
    }

    #[test]
    fn test_label_combines_worker_and_sink() {
        let sink = Arc::new(RecordingSink::<u32, u32, String>::new());
        let binder = Binder::new(sink, BindConfig::default());

        let task = binder.bind(noop_worker("fetchUser"));
        assert_eq!(task.name(), "boundFetchUser(recording)");
    }

    #[test]
    fn test_label_uses_bus_stream_name() {
        let bus: EventBus<u32, u32, String> = EventBus::new("user/FETCH", 8);
        let binder = Binder::new(Arc::new(bus), BindConfig::default());

        let task = binder.bind(noop_worker("fetchUser"));
        assert_eq!(task.name(), "boundFetchUser(user/FETCH)");
    }

    #[test]
    fn test_label_upper_cases_only_first_letter() {
        let sink = Arc::new(RecordingSink::<u32, u32, String>::new());
        let binder = Binder::new(sink, BindConfig::default());

        let task = binder.bind(noop_worker("getALL"));
        assert_eq!(task.name(), "boundGetALL(recording)");
    }

    #[test]
    fn test_label_with_empty_worker_name() {
        let sink = Arc::new(RecordingSink::<u32, u32, String>::new());
        let binder = Binder::new(sink, BindConfig::default());

        let task = binder.bind(noop_worker(""));
        assert_eq!(task.name(), "bound(recording)");
    }

    #[test]
    fn test_bound_tasks_inherit_binder_config() {
        use crate::config::RetryPolicy;

        let sink = Arc::new(RecordingSink::<u32, u32, String>::new());
        let config = BindConfig::default()
            .with_retry(RetryPolicy::Attempts(3))
            .with_skip_started(true);
        let binder = Binder::new(sink, config);

        let task = binder.bind(noop_worker("fetchUser"));
        assert_eq!(task.config(), config);
        assert_eq!(binder.config(), config);
    }

    #[tokio::test]
    async fn test_one_binder_serves_workers_with_different_args() {
        use crate::events::EventKind;

        let sink = Arc::new(RecordingSink::<u32, u32, String>::new());
        let binder = Binder::new(sink.clone(), BindConfig::default());

        let fetch = binder.bind(noop_worker("fetchUser"));
        let scale = binder.bind(WorkerFn::arc(
            "scaleUser",
            |_ctx: CancellationToken, n: u32, (mul, add): (u32, u32)| async move {
                Ok::<u32, String>(n * mul + add)
            },
        ));

        assert_eq!(fetch.run(CancellationToken::new(), 7, ()).await.ok(), Some(7));
        assert_eq!(scale.run(CancellationToken::new(), 7, (2, 1)).await.ok(), Some(15));
        assert_eq!(
            sink.kinds(),
            [
                EventKind::Started,
                EventKind::Succeeded,
                EventKind::Started,
                EventKind::Succeeded,
            ]
        );
    }
}
