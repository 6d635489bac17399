use std::{env, io, path::PathBuf};

use anyhow::{Context, Result};

const APPLICATION_DIR: &str = "godtimer";

/// Resolves and creates the default application directory. Only logs are kept there.
pub fn create_application_default_path() -> Result<PathBuf> {
    ensure_dir(state_home()?.join(APPLICATION_DIR))
}

fn state_home() -> Result<PathBuf> {
    cfg_if::cfg_if! {
        if #[cfg(windows)] {
            env::var("APPDATA")
                .map(PathBuf::from)
                .context("APPDATA should be present on Windows")
        } else {
            env::var("XDG_STATE_HOME")
                .map(PathBuf::from)
                .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/state")))
                .context("Couldn't find neither XDG_STATE_HOME nor HOME")
        }
    }
}

/// Creates `path` with all of its parents. An existing directory is fine.
pub fn ensure_dir(path: PathBuf) -> Result<PathBuf> {
    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v).with_context(|| format!("Failed to create {}", path.display())),
    }
}
