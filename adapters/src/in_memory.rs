use std::sync::{PoisonError, RwLock};
use std::time::Instant;

use async_trait::async_trait;

use application::ports::out_::AsyncTimer;

/// Timer that returns immediately and remembers every deadline it was given.
pub struct InMemoryTimer {
    deadlines: RwLock<Vec<Instant>>,
}

impl InMemoryTimer {
    pub fn new() -> Self {
        Self {
            deadlines: RwLock::new(Vec::new()),
        }
    }

    pub fn get_deadlines(&self) -> Vec<Instant> {
        self.deadlines.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for InMemoryTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncTimer for InMemoryTimer {
    async fn sleep_until(
        &self,
        deadline: Instant,
    ) {
        self.deadlines.write().unwrap_or_else(PoisonError::into_inner).push(deadline);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn records_deadlines_without_waiting() {
        let timer = InMemoryTimer::new();
        let start = Instant::now();

        timer.sleep_until(start + Duration::from_secs(3600)).await;

        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(timer.get_deadlines(), vec![start + Duration::from_secs(3600)]);
    }
}
