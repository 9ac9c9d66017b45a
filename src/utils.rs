use crate::time::TimeProvider;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{format::Writer, time::FormatTime},
    EnvFilter,
};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log timestamps taken from a [`TimeProvider`], so mocked clocks show up in the logs.
pub struct ProviderTime<T: TimeProvider> {
    pub time_provider: Arc<T>,
}

impl<T: TimeProvider> FormatTime for ProviderTime<T> {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", ux_ts_to_string(self.time_provider.now()))
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls are ignored.
pub fn start_log<T: TimeProvider + 'static>(time_provider: Option<Arc<T>>, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    _ = match time_provider {
        Some(time_provider) => builder.with_timer(ProviderTime { time_provider }).try_init(),
        None => builder.try_init(),
    };
}

/// Millisecond timestamp as RFC 3339, or the raw number if out of range.
pub fn ux_ts_to_string(ts_millis: i64) -> String {
    match Utc.timestamp_millis_opt(ts_millis).single() {
        Some(time) => time.to_rfc3339(),
        None => ts_millis.to_string(),
    }
}

/// Groups thousands with commas: 27000 -> "27,000".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
