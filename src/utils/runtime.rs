use anyhow::Result;

/// The tracker runs on one thread: the tick cadence and the event loop take turns on it.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
