use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Clock port for reading wall-clock time and waiting
///
/// Backoff sleeps go through this port so tests can run on virtual time.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;

    /// Blocks the current task for `duration`; always runs to completion
    async fn sleep(&self, duration: Duration);
}

#[async_trait]
impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}
