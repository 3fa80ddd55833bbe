use serde::Deserialize;

/// What to do with a delay below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeDelay {
    /// Treat it as zero, like a host timer would.
    #[default]
    Clamp,
    Reject,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub negative: NegativeDelay,
}

impl DelayConfig {
    #[must_use]
    pub fn rejecting_negative() -> Self {
        Self {
            negative: NegativeDelay::Reject,
        }
    }
}
