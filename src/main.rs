use anyhow::Result;
use godtimer::app::run_app;
use tracing::error;

fn main() -> Result<()> {
    run_app().inspect_err(|e| {
        error!("Error running godtimer {e:?}");
    })?;
    Ok(())
}
