use crate::time::TimeProvider;
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::Duration,
};

/// Clock that only moves when told to. `advance_time` returns immediately.
#[derive(Debug)]
pub struct MockTimeProvider {
    current_time: Arc<AtomicI64>,
}

impl MockTimeProvider {
    pub fn new(start_time: i64) -> Self {
        Self { current_time: Arc::new(AtomicI64::new(start_time)) }
    }
}

#[async_trait]
impl TimeProvider for MockTimeProvider {
    fn now(&self) -> i64 {
        self.current_time.load(Ordering::SeqCst)
    }

    async fn sleep(&self, _duration: Duration) {}

    async fn advance_time(&self, millis: i64) {
        self.current_time.fetch_add(millis, Ordering::SeqCst);
        // let the other tasks (api, tests) interleave with the frame loop
        tokio::task::yield_now().await;
    }

    fn set(&self, new_time: i64) {
        self.current_time.store(new_time, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn moves_only_when_advanced() {
        let tp = MockTimeProvider::new(1_000);
        assert_eq!(tp.now(), 1_000);
        tp.sleep(Duration::from_secs(60)).await;
        assert_eq!(tp.now(), 1_000);
        tp.advance_time(16).await;
        assert_eq!(tp.now(), 1_016);
        tp.set(0);
        assert_eq!(tp.now(), 0);
    }
}
