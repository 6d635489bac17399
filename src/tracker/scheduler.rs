use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use tokio::{runtime::Handle, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, trace, Instrument};

use crate::utils::clock::{Clock, DefaultClock};

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// A single armed cadence.
struct Cadence {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Calls a tick callback once per period. At most one cadence is armed at a time: [start] disarms
/// the previous one before arming a new one.
///
/// The scheduler holds no tracker state, it only tells someone else that a period has passed.
///
/// [start]: TickScheduler::start
pub struct TickScheduler {
    period: Duration,
    clock: Arc<dyn Clock>,
    cadence: Option<Cadence>,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD, Arc::new(DefaultClock))
    }
}

impl TickScheduler {
    pub fn new(period: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            period,
            clock,
            cadence: None,
        }
    }

    /// Arms the cadence. The first call of `on_tick` happens one period after this returns.
    ///
    /// Deadlines are absolute, so a slow callback doesn't push later ticks back. Must be called
    /// from inside a tokio runtime.
    pub fn start<F>(&mut self, mut on_tick: F) -> Result<()>
    where
        F: FnMut() + Send + 'static,
    {
        let runtime =
            Handle::try_current().context("Tick scheduler can only start inside a tokio runtime")?;
        self.stop();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let clock = self.clock.clone();
        let period = self.period;

        let span = info_span!("tick cadence", ?period);
        let task = runtime.spawn(
            async move {
                let mut deadline = clock.instant();
                loop {
                    deadline += period;
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => return,
                        _ = clock.sleep_until(deadline) => {
                            trace!("Period elapsed");
                            on_tick();
                        }
                    }
                }
            }
            .instrument(span),
        );

        info!("Armed tick cadence every {period:?}");
        self.cadence = Some(Cadence { cancel, task });
        Ok(())
    }

    /// Disarms the cadence. Doing it twice is fine.
    pub fn stop(&mut self) {
        if let Some(Cadence { cancel, task }) = self.cadence.take() {
            cancel.cancel();
            task.abort();
            info!("Disarmed tick cadence");
        }
    }

    pub fn is_running(&self) -> bool {
        self.cadence.is_some()
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
