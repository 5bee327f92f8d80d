//! Logging - tracing subscriber setup
//!
//! Logs go to stderr and, when the data directory is available, to a daily
//! rolling file under `<data dir>/logs`.

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::helpers::get_or_create_data_dir;

const LOG_FILE_PREFIX: &str = "gallery.log";

/// `RUST_LOG` directives, falling back to `info` when unset
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// life of the process.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            tracing::warn!(error = %e, "File logging disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_level_is_honored() {
        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }
}
