use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Overrides where log lines are written.
pub const LOG_FILE_ENV: &str = "REELVIEW_LOG_FILE";

/// Route logs to a file; the terminal belongs to the UI.
///
/// `RUST_LOG` wins when set. Otherwise Reelview crates log at debug and
/// everything else at warn.
pub fn init() -> Result<PathBuf> {
    let path = log_file_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let mut builder = Builder::new();
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("reelview_core", LevelFilter::Debug)
            .filter_module("reelview_tui", LevelFilter::Debug)
            .filter_module("reelview", LevelFilter::Debug);
    }

    builder
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("initialize logger")?;

    Ok(path)
}

fn log_file_path() -> PathBuf {
    std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("reelview.log"))
}
