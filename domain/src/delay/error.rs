use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelayError {
    #[error("invalid delay of {ms} ms: {reason}")]
    InvalidArgument { ms: f64, reason: &'static str },
}
