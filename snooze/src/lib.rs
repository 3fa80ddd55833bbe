//! Non-blocking delays.
//!
//! ```no_run
//! # async fn run() -> Result<(), snooze::DelayError> {
//! snooze::sleep(50.0)?.await;
//! # Ok(())
//! # }
//! ```
//!
//! The returned future must be driven by a tokio runtime with the time
//! driver enabled.

use std::sync::Arc;

use adapters::TokioTimer;
use application::ports::in_::SleepService;

pub use application::ports::in_::Sleep;
pub use domain::{Delay, DelayConfig, DelayError, NegativeDelay};

/// Returns a future that resolves once at least `ms` milliseconds have
/// elapsed since this call. Negative input is treated as zero.
pub fn sleep(ms: f64) -> Result<Sleep, DelayError> {
    sleep_with(DelayConfig::default(), ms)
}

/// Same as [`sleep`] with an explicit policy for negative input.
pub fn sleep_with(
    config: DelayConfig,
    ms: f64,
) -> Result<Sleep, DelayError> {
    SleepService::with_config(Arc::new(TokioTimer::new()), config).sleep(ms)
}
