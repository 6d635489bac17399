use anyhow::Result;
use chrono::{DateTime, Utc};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::{self, UnboundedSender},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::tracker::{
    accumulator::{TimeAccumulator, TrackerSnapshot},
    scheduler::TickScheduler,
};

use super::{command::Command, presenter::Presenter};

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the accumulator and is the only place it gets mutated. Ticks from the scheduler and
/// commands from the input are applied one at a time, and every published snapshot is rendered.
pub struct TrackerLoop<P: Presenter> {
    accumulator: TimeAccumulator,
    scheduler: TickScheduler,
    presenter: P,
    shutdown: CancellationToken,
    started_at: DateTime<Utc>,
}

impl<P: Presenter> TrackerLoop<P> {
    pub fn new(
        accumulator: TimeAccumulator,
        scheduler: TickScheduler,
        presenter: P,
        shutdown: CancellationToken,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            accumulator,
            scheduler,
            presenter,
            shutdown,
            started_at,
        }
    }

    /// Runs until `quit` is read or the shutdown token is cancelled. Closed input doesn't stop the
    /// clock. Returns the final totals.
    pub async fn run<R: AsyncBufRead + Unpin>(mut self, input: R) -> Result<TrackerSnapshot> {
        let (ticks, mut tick_receiver) = mpsc::unbounded_channel::<()>();
        let mut snapshots = self.accumulator.subscribe();
        let mut lines = input.lines();
        let mut input_open = true;
        let shutdown = self.shutdown.clone();

        self.presenter.status(&snapshots.borrow_and_update())?;
        self.arm(&ticks)?;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutting down tracker loop");
                    break;
                }
                Some(()) = tick_receiver.recv() => self.accumulator.tick(),
                changed = snapshots.changed() => {
                    changed?;
                    let snapshot = *snapshots.borrow_and_update();
                    self.presenter.status(&snapshot)?;
                }
                line = lines.next_line(), if input_open => match line? {
                    Some(line) => {
                        if self.handle_line(&line, &ticks)? == Flow::Quit {
                            break;
                        }
                    }
                    None => {
                        debug!("Input closed, the clock keeps running");
                        input_open = false;
                    }
                },
            }
        }

        self.scheduler.stop();
        let snapshot = self.accumulator.snapshot();
        self.presenter.summary(&snapshot, self.started_at)?;
        Ok(snapshot)
    }

    fn arm(&mut self, ticks: &UnboundedSender<()>) -> Result<()> {
        let ticks = ticks.clone();
        self.scheduler.start(move || {
            if ticks.send(()).is_err() {
                debug!("Tracker loop is gone, dropping tick");
            }
        })
    }

    fn handle_line(&mut self, line: &str, ticks: &UnboundedSender<()>) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<Command>() {
            Ok(command) => self.apply(command, ticks),
            Err(e) => {
                warn!("Rejected input {line:?}: {e}");
                self.presenter.notice(&e.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn apply(&mut self, command: Command, ticks: &UnboundedSender<()>) -> Result<Flow> {
        debug!("Applying {command:?}");
        match command {
            Command::Switch(category) => self.accumulator.switch_to(category),
            Command::List => self.presenter.list(&self.accumulator.snapshot())?,
            Command::Pause => {
                self.scheduler.stop();
                self.presenter.notice("Paused")?;
            }
            Command::Resume => {
                // Re-arming would drop the partial second of the running cadence.
                if self.scheduler.is_running() {
                    self.presenter.notice("Already running")?;
                } else {
                    self.arm(ticks)?;
                    self.presenter.notice("Resumed")?;
                }
            }
            Command::Reset => self.accumulator.reset(),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
