//! tracing subscriber setup: console layer plus optional rotating JSON file.

use eyre::WrapErr;
use reminder_config::Logging;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Open the log file appender described by `[logging]`.
fn file_appender(path: &Path, rotation: Option<&str>) -> eyre::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| eyre::eyre!("open log file {:?}: no file name", path))?;
    let rotation = match rotation.unwrap_or("never") {
        "daily" => Rotation::DAILY,
        "hourly" => Rotation::HOURLY,
        _ => Rotation::NEVER,
    };
    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(name.to_string_lossy().into_owned())
        .build(dir)
        .wrap_err_with(|| format!("open log file {:?}", path))
}

/// Install the global subscriber. The returned guard flushes the file layer on drop;
/// hold it for the rest of the run.
pub fn init_tracing(json: bool, level: &str, cfg: &Logging) -> eyre::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match cfg.file.as_deref() {
        Some(path) => {
            let appender = file_appender(Path::new(path), cfg.rotation.as_deref())?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().json().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| eyre::eyre!("init logging: {e}"))?;
    Ok(guard)
}
