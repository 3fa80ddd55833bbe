use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, trace};

use crate::ports::out_::DynTimer;
use domain::{Delay, DelayConfig, DelayError};

/// Deferred completion returned by [`SleepService::sleep`]. Resolves with `()`.
pub type Sleep = BoxFuture<'static, ()>;

/// Stand-in deadline for delays the platform clock cannot represent.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

#[derive(Clone)]
pub struct SleepService {
    timer: DynTimer,
    config: DelayConfig,
}

impl SleepService {
    pub fn new(timer: DynTimer) -> Self {
        Self::with_config(timer, DelayConfig::default())
    }

    pub fn with_config(
        timer: DynTimer,
        config: DelayConfig,
    ) -> Self {
        Self { timer, config }
    }

    pub fn config(&self) -> &DelayConfig {
        &self.config
    }

    /// Validates `ms` and returns a future that resolves once at least that
    /// many milliseconds have passed since this call.
    ///
    /// The deadline is fixed here, not on first poll. Invalid input is
    /// reported before anything is handed to the timer.
    pub fn sleep(
        &self,
        ms: f64,
    ) -> Result<Sleep, DelayError> {
        let delay = Delay::from_millis(ms, &self.config)?;
        Ok(self.sleep_for(delay))
    }

    pub fn sleep_for(
        &self,
        delay: Delay,
    ) -> Sleep {
        let started = Instant::now();
        let deadline = started
            .checked_add(delay.duration())
            .unwrap_or_else(|| started + FAR_FUTURE);
        let timer = Arc::clone(&self.timer);
        debug!(ms = delay.as_millis_f64(), "delay scheduled");

        async move {
            timer.sleep_until(deadline).await;
            trace!(elapsed = ?started.elapsed(), "delay elapsed");
        }
        .boxed()
    }
}
