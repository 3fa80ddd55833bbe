use std::time::Duration;

use tracing::warn;

use super::{DelayConfig, DelayError, NegativeDelay};

/// A validated, non-negative wait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delay(Duration);

impl Delay {
    pub const ZERO: Delay = Delay(Duration::ZERO);

    /// Builds a delay from a millisecond count.
    ///
    /// Sub-millisecond fractions are kept and rounded up to the next whole
    /// nanosecond, so the resulting duration is never shorter than `ms`.
    /// Non-finite input is always rejected; negative input follows
    /// `config.negative`.
    pub fn from_millis(
        ms: f64,
        config: &DelayConfig,
    ) -> Result<Self, DelayError> {
        if !ms.is_finite() {
            return Err(DelayError::InvalidArgument {
                ms,
                reason: "must be a finite number",
            });
        }

        if ms < 0.0 {
            return match config.negative {
                NegativeDelay::Clamp => {
                    warn!(ms, "negative delay clamped to zero");
                    Ok(Self::ZERO)
                }
                NegativeDelay::Reject => Err(DelayError::InvalidArgument {
                    ms,
                    reason: "must not be negative",
                }),
            };
        }

        // -0.0 lands here too and converts to zero
        let duration = Duration::try_from_secs_f64(ms / 1000.0).map_err(|_| DelayError::InvalidArgument {
            ms,
            reason: "too large to represent",
        })?;

        if duration.as_secs_f64() * 1000.0 < ms {
            return Ok(Self(duration.checked_add(Duration::from_nanos(1)).unwrap_or(duration)));
        }
        Ok(Self(duration))
    }

    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration)
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn as_millis_f64(&self) -> f64 {
        self.0.as_secs_f64() * 1000.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Duration> for Delay {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl From<Delay> for Duration {
    fn from(delay: Delay) -> Self {
        delay.0
    }
}
