// Copyright (c) 2026 rezky_nightky

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{RainError, Result};

pub const LOG_ENV: &str = "DIGIRAIN_LOG";

/// Route tracing events to `path`. The terminal is the animation surface, so
/// without a path nothing is installed and events are dropped.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RainError::Logging(format!("{}: {}", path.display(), e)))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| RainError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn unwritable_path_is_a_logging_error() {
        let dir = std::env::temp_dir().join("digirain-missing-dir-for-test");
        let _ = std::fs::remove_dir_all(&dir);
        let err = init(Some(&dir.join("rain.log"))).unwrap_err();
        assert!(matches!(err, RainError::Logging(_)));
    }

    #[test]
    fn events_land_in_the_file() {
        let path = std::env::temp_dir().join(format!("digirain-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        init(Some(&path)).unwrap();
        tracing::info!(width = 80, "rain started");
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("rain started"));
        let _ = std::fs::remove_file(&path);
    }
}
