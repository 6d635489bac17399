use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Cancels `cancelation` on Ctrl-C. Returns early if someone else cancels it first, so it can be
/// joined with the event loop.
pub async fn detect_shutdown(cancelation: CancellationToken) {
    select! {
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => {
                    info!("Received Ctrl-C");
                    cancelation.cancel();
                }
                Err(e) => error!("Can't listen for Ctrl-C {e:?}"),
            }
        },
        _ = cancelation.cancelled() => (),
    };
}
