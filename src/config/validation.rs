use super::Config;
use crate::constants::MAX_HTTP_TIMEOUT_SECONDS;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Provider base URLs must be absolute `http://` or `https://` URLs
/// - HTTP timeout must be between 1 and `MAX_HTTP_TIMEOUT_SECONDS`
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_base_url("mysportsfeeds_base_url", &config.mysportsfeeds_base_url)?;
    validate_base_url("espn_base_url", &config.espn_base_url)?;

    if config.http_timeout_seconds == 0 || config.http_timeout_seconds > MAX_HTTP_TIMEOUT_SECONDS {
        return Err(AppError::config_error(format!(
            "HTTP timeout must be between 1 and {MAX_HTTP_TIMEOUT_SECONDS} seconds, got {}",
            config.http_timeout_seconds
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_base_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https://, got '{url}'"
        )));
    }
    Ok(())
}
