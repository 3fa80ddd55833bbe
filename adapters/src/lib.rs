mod in_memory;
mod tokio_timer;

pub use in_memory::InMemoryTimer;
pub use tokio_timer::TokioTimer;
