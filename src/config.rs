//! # Binding configuration.
//!
//! Provides [`BindConfig`], the per-binder settings applied to every task it
//! produces, and [`RetryPolicy`], the retry attempt budget.
//!
//! Config is used in one way: `Binder::new(sink, config)`. Every task bound
//! through that binder shares the same settings.
//!
//! ## Sentinel values
//! - `RetryPolicy::None` → single execution, no retry machinery
//! - `RetryPolicy::Attempts(0)` → treated the same as `None`
//! - `RetryPolicy::Invalid` → unusable retry count; single execution

/// Retry attempt budget for a bound task.
///
/// The budget is the **total** number of worker executions, not the number of
/// re-executions: `Attempts(3)` means at most three runs of the worker.
///
/// `Invalid` models a retry count that was supplied but does not describe a
/// number of attempts (for example, parsed from malformed external input).
/// It is kept distinct from `None` so the caller's intent survives in debug
/// output, but both disable the retry path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryPolicy {
    /// No retry configured; the worker runs exactly once.
    None,
    /// Run the worker up to `n` times, pausing between attempts.
    Attempts(u32),
    /// A retry count was supplied but is not a usable number.
    Invalid,
}

impl Default for RetryPolicy {
    /// Returns [`RetryPolicy::None`] (single execution).
    fn default() -> Self {
        RetryPolicy::None
    }
}

impl RetryPolicy {
    /// Parses a retry policy from a textual attempt count.
    ///
    /// - Empty (or all-whitespace) input → [`RetryPolicy::None`]
    /// - An unsigned integer → [`RetryPolicy::Attempts`]
    /// - Anything else → [`RetryPolicy::Invalid`]
    ///
    /// # Example
    /// ```
    /// use taskbind::RetryPolicy;
    ///
    /// assert_eq!(RetryPolicy::parse("3"), RetryPolicy::Attempts(3));
    /// assert_eq!(RetryPolicy::parse(" 3 "), RetryPolicy::Attempts(3));
    /// assert_eq!(RetryPolicy::parse(""), RetryPolicy::None);
    /// assert_eq!(RetryPolicy::parse("many"), RetryPolicy::Invalid);
    /// ```
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return RetryPolicy::None;
        }
        match trimmed.parse::<u32>() {
            Ok(n) => RetryPolicy::Attempts(n),
            Err(_) => RetryPolicy::Invalid,
        }
    }

    /// Returns the usable attempt budget as an `Option`.
    ///
    /// - `None` → run the worker once, without the retry loop
    /// - `Some(n)` → run the worker up to `n` times
    ///
    /// `Attempts(0)` and `Invalid` both yield `None`: a zero budget is
    /// equivalent to no budget, and an unusable count must not enable
    /// the retry path.
    #[inline]
    pub fn usable_attempts(&self) -> Option<u32> {
        match self {
            RetryPolicy::Attempts(n) if *n >= 1 => Some(*n),
            _ => None,
        }
    }
}

/// Configuration shared by every task produced from one binder.
///
/// Defines:
/// - **Event verbosity**: whether the `Started` event is emitted
/// - **Retry budget**: how many times the worker may run per invocation
///
/// ## Field semantics
/// - `skip_started`: when `true`, invocations emit no `Started` event;
///   terminal and cancellation events are unaffected
/// - `retry`: total attempt budget, validated at invocation time
///   (binding never rejects a config)
///
/// ## Notes
/// All fields are public. Prefer [`RetryPolicy::usable_attempts`] over
/// matching on `retry` directly to avoid sprinkling sentinel checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindConfig {
    /// Suppresses the `Started` lifecycle event for all invocations.
    pub skip_started: bool,

    /// Retry attempt budget for each invocation.
    ///
    /// The budget is inspected when the task runs, not when it is bound,
    /// so an `Invalid` policy still produces a usable (single-run) task.
    pub retry: RetryPolicy,
}

impl BindConfig {
    /// Replaces the retry budget.
    #[inline]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Enables or disables emission of the `Started` event.
    #[inline]
    pub fn with_skip_started(mut self, skip: bool) -> Self {
        self.skip_started = skip;
        self
    }
}

impl Default for BindConfig {
    /// Default configuration:
    ///
    /// - `skip_started = false` (every invocation announces itself)
    /// - `retry = RetryPolicy::None` (single execution)
    fn default() -> Self {
        Self {
            skip_started: false,
            retry: RetryPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_once_and_announces() {
        let config = BindConfig::default();
        assert!(!config.skip_started);
        assert_eq!(config.retry, RetryPolicy::None);
        assert_eq!(config.retry.usable_attempts(), None);
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(RetryPolicy::parse("1"), RetryPolicy::Attempts(1));
        assert_eq!(RetryPolicy::parse("10"), RetryPolicy::Attempts(10));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(RetryPolicy::parse("  7\n"), RetryPolicy::Attempts(7));
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(RetryPolicy::parse(""), RetryPolicy::None);
        assert_eq!(RetryPolicy::parse("   "), RetryPolicy::None);
    }

    #[test]
    fn test_parse_garbage_is_invalid() {
        assert_eq!(RetryPolicy::parse("many"), RetryPolicy::Invalid);
        assert_eq!(RetryPolicy::parse("3.5"), RetryPolicy::Invalid);
        assert_eq!(RetryPolicy::parse("-2"), RetryPolicy::Invalid);
    }

    #[test]
    fn test_unusable_budgets_disable_retry() {
        assert_eq!(RetryPolicy::None.usable_attempts(), None);
        assert_eq!(RetryPolicy::Invalid.usable_attempts(), None);
        assert_eq!(RetryPolicy::Attempts(0).usable_attempts(), None);
    }

    #[test]
    fn test_positive_budgets_enable_retry() {
        assert_eq!(RetryPolicy::Attempts(1).usable_attempts(), Some(1));
        assert_eq!(RetryPolicy::Attempts(5).usable_attempts(), Some(5));
    }

    #[test]
    fn test_with_helpers_chain() {
        let config = BindConfig::default()
            .with_retry(RetryPolicy::Attempts(3))
            .with_skip_started(true);
        assert!(config.skip_started);
        assert_eq!(config.retry.usable_attempts(), Some(3));
    }
}
