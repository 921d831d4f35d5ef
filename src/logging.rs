//! Logging setup: console plus a daily-rolling file under `logs/`.
//!
//! Initialisation is explicit and owned by `main`, which must hold the
//! returned guards until exit; the process is short-lived and the file
//! writer is non-blocking, so dropping them early loses the tail of the log.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "logs";

pub fn init() -> (WorkerGuard, WorkerGuard) {
    let file_appender = rolling::daily(LOG_DIR, "talaria.log");
    let (file_writer, file_guard) = non_blocking(file_appender);
    let (stdout_writer, stdout_guard) = non_blocking(std::io::stdout());

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    let console_layer = fmt::layer()
        .with_writer(stdout_writer)
        .with_target(false);

    // Overridable via RUST_LOG.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    (file_guard, stdout_guard)
}
