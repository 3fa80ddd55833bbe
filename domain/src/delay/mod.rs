mod config;
mod error;
mod value;


pub use config::{DelayConfig, NegativeDelay};
pub use error::DelayError;
pub use value::Delay;
