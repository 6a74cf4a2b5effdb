//! Tracing setup. The terminal is owned by the UI, so logs go to a file.

use crate::config::AppConfig;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "vendor_onboarding_tui=info";
const LOG_FILE_NAME: &str = "vendor-onboarding-tui.log";

fn open_log_file() -> Option<(File, PathBuf)> {
    let dir = AppConfig::data_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((file, path))
}

/// Install the global subscriber. Returns the log file path when file
/// logging is active; otherwise logs fall back to stderr.
pub fn init() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (writer, ansi, path) = match open_log_file() {
        Some((file, path)) => (BoxMakeWriter::new(Mutex::new(file)), false, Some(path)),
        None => (BoxMakeWriter::new(io::stderr), true, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi),
        )
        .init();

    path
}
