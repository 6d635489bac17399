use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::time::Instant;

/// Source of time for the tick cadence and for reporting. Everything goes through tokio's clock,
/// so tests can pause and advance it.
#[async_trait]
pub trait Clock: Sync + Send + 'static {
    /// Wall clock time, only used for reporting.
    fn time(&self) -> DateTime<Utc>;

    /// Monotonic point cadence deadlines are computed from.
    fn instant(&self) -> Instant;

    async fn sleep_until(&self, deadline: Instant);
}

pub struct DefaultClock;

#[async_trait]
impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }

    async fn sleep_until(&self, deadline: Instant) {
        tokio::time::sleep_until(deadline).await;
    }
}
