use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

#[async_trait]
pub trait TimeProvider: Send + Sync + Debug {
    fn now(&self) -> i64; // Returns the current time as a Unix UTC timestamp in milliseconds
    async fn sleep(&self, duration: Duration);
    async fn advance_time(&self, millis: i64);
    fn set(&self, new_time: i64);
}

#[derive(Debug)]
pub struct RealTimeProvider;

#[async_trait]
impl TimeProvider for RealTimeProvider {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    async fn advance_time(&self, millis: i64) {
        self.sleep(Duration::from_millis(millis.max(0) as u64)).await;
    }

    fn set(&self, _new_time: i64) {}
}
