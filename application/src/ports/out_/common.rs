use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

pub type DynTimer = Arc<dyn AsyncTimer>;

#[async_trait]
pub trait AsyncTimer: Send + Sync {
    /// Resolves once `deadline` has passed. A deadline in the past resolves
    /// at the next scheduling opportunity.
    async fn sleep_until(
        &self,
        deadline: Instant,
    );
}
