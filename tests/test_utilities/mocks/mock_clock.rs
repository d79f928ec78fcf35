use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use license_page_generator::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Clock that only moves when something sleeps on it
pub struct VirtualClock {
    now: Mutex<DateTime<Utc>>,
    total_slept: Mutex<Duration>,
}

impl VirtualClock {
    pub fn starting_at(unix_secs: i64) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Utc.timestamp_opt(unix_secs, 0).unwrap()),
            total_slept: Mutex::new(Duration::ZERO),
        })
    }

    pub fn total_slept(&self) -> Duration {
        *self.total_slept.lock().unwrap()
    }
}

#[async_trait]
impl Clock for VirtualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }

    async fn sleep(&self, duration: Duration) {
        *self.now.lock().unwrap() += chrono::Duration::from_std(duration).unwrap();
        *self.total_slept.lock().unwrap() += duration;
    }
}
