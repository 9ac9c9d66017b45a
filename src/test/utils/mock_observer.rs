use crate::simulation::MonthObserver;
use mockall::mock;
use std::sync::Arc;
use tracing::trace;

mock! {
    #[derive(Debug)]
    pub MonthObserver {}

    impl MonthObserver for MonthObserver {
        fn on_month_change(&self, month: u8);
    }
}

/// Observer that accepts any number of month changes.
pub fn set_month_observer() -> Arc<MockMonthObserver> {
    let mut observer = MockMonthObserver::new();
    observer.expect_on_month_change().with(mockall::predicate::always()).times(0..).returning(|month| {
        trace!("Mocked month change to {}", month);
    });
    Arc::new(observer)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn usable_as_month_observer() {
        let observer: Arc<dyn MonthObserver> = set_month_observer();
        observer.on_month_change(3);
        assert!(format!("{:?}", observer).contains("MockMonthObserver"));
    }
}
