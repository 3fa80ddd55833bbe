mod delay;

pub use delay::{Delay, DelayConfig, DelayError, NegativeDelay};
