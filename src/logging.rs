use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::formatter::ColorPolicy;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILE_NAME: &str = "sport_schedule.log";

/// Splits the effective log location into directory and file name.
/// `--log-file` wins over the config file; otherwise the platform log directory is used.
pub fn resolve_log_location(args_log_file: Option<&str>, config: &Config) -> (String, String) {
    match args_log_file.or(config.log_file_path.as_deref()) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (
            Config::get_log_dir_path(),
            DEFAULT_LOG_FILE_NAME.to_string(),
        ),
    }
}

fn crate_filter(level: &str) -> Result<EnvFilter, AppError> {
    let directive = format!("sport_schedule={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Daily rolling appender writing `{log_dir}/{log_file_name}.YYYY-MM-DD`.
fn create_file_appender(
    log_dir: &str,
    log_file_name: &str,
) -> Result<RollingFileAppender, AppError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_name)
        .build(log_dir)
        .map_err(|e| {
            AppError::log_setup_error(format!("Cannot open log file in '{log_dir}': {e}"))
        })
}

/// Sets up logging for the application.
///
/// - Everything at `info` and above goes to a daily rolling log file
/// - Warnings and errors are mirrored to stderr, or everything from `debug`
///   up when `--debug` is set, so stdout only carries the report
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config: &Config,
) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args.log_file.as_deref(), config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = create_file_appender(&log_dir, &log_file_name)?;

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_level = if args.debug { "debug" } else { "info" };
    let stderr_level = if args.debug { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_ansi(ColorPolicy::from_env().is_enabled())
                .with_target(false)
                .with_filter(crate_filter(stderr_level)?),
        )
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(crate_filter(file_level)?),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
