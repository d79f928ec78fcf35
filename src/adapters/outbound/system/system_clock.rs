use crate::ports::outbound::Clock;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// SystemClock adapter reading the wall clock and sleeping on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tracing::debug!(seconds = duration.as_secs_f64(), "sleeping");
        }
        tokio::time::sleep(duration).await;
    }
}
