//! Logging bootstrap.
//!
//! Log lines go to ~/.config/holiday/logs/holiday.log.YYYY-MM-DD so they
//! never interleave with the chat on the terminal.

use holiday_infrastructure::HolidayPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the log filter.
pub const LOG_ENV_VAR: &str = "HOLIDAY_LOG";

const DEFAULT_FILTER: &str =
    "holiday=info,holiday_interaction=info,holiday_infrastructure=info";

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let logs_dir = match HolidayPaths::logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("Logging disabled: cannot create {}: {}", logs_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "holiday.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Some(guard)
}
