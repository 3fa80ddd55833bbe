mod sleep_service;

pub use sleep_service::{Sleep, SleepService};
