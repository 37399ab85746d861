//! Structured logging for weft.
//!
//! Installs a `tracing` subscriber with console output and, in debug builds, a
//! JSON log file. Records emitted through the `log` facade by the other weft
//! crates are forwarded into the same subscriber. The filter honours
//! `RUST_LOG` first and the config's `debug.log_level` second.

use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use weft_config::Config;

/// Filter used when neither `RUST_LOG` nor the config specify one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "weft.log";

/// Initialize the global tracing subscriber.
///
/// Sets up structured logging with:
/// - Console output with timestamps, module paths, and severity levels
/// - JSON file logging in debug builds (when `log_dir` is given)
/// - Environment-based filtering (respects RUST_LOG)
/// - The config's `debug.log_level` as the fallback filter
///
/// Calling this twice panics, as with any global subscriber install.
///
/// # Examples
///
/// ```no_run
/// use weft_config::Config;
/// use weft_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), cfg!(debug_assertions), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_file_path(log_dir))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!(dir = %log_dir.display(), "File logging enabled");
        return;
    }

    subscriber.init();
}

/// Resolve the filter directives from an optional config.
///
/// An empty `log_level` counts as unset.
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|config| config.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Path of the JSON log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
