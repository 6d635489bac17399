//! Terminal front-end. Reads commands from stdin, forwards ticks and switches into the tracker and
//! draws what it publishes.

pub mod args;
pub mod command;
pub mod event_loop;
pub mod presenter;
pub mod shutdown;

use std::{io::IsTerminal, sync::Arc};

use anyhow::Result;
use args::AppArgs;
use clap::Parser;
use event_loop::TrackerLoop;
use presenter::TerminalPresenter;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{
    tracker::{
        accumulator::TimeAccumulator,
        scheduler::{TickScheduler, DEFAULT_TICK_PERIOD},
    },
    utils::{
        clock::{Clock, DefaultClock},
        dir::{create_application_default_path, ensure_dir},
        logging::enable_logging,
        runtime::single_thread_runtime,
    },
};

pub fn run_app() -> Result<()> {
    let args = AppArgs::parse();
    let app_dir = args
        .dir
        .clone()
        .map_or_else(create_application_default_path, ensure_dir)?;
    enable_logging(&app_dir.join("logs"), args.log, args.log_console)?;

    let runtime = single_thread_runtime()?;
    let result = runtime.block_on(start_tracker(args));
    // A pending stdin read can't be cancelled, don't wait for it.
    runtime.shutdown_background();
    result
}

/// Starts the clock on the terminal and runs until `quit` or Ctrl-C.
pub async fn start_tracker(args: AppArgs) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let shutdown_token = CancellationToken::new();
    let stdout = std::io::stdout();
    let colored = stdout.is_terminal();

    let tracker = TrackerLoop::new(
        TimeAccumulator::new(args.category),
        TickScheduler::new(DEFAULT_TICK_PERIOD, clock.clone()),
        TerminalPresenter::new(stdout, args.compact, colored),
        shutdown_token.clone(),
        clock.time(),
    );

    info!("Starting tracker on {}", args.category);
    let (_, result) = tokio::join!(shutdown::detect_shutdown(shutdown_token.clone()), async {
        let result = tracker.run(BufReader::new(tokio::io::stdin())).await;
        shutdown_token.cancel();
        result
    });
    result?;
    Ok(())
}
