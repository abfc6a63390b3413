use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars, providers};
use crate::error::AppError;
use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Every field has a default, so a missing or partial config file is fine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Upstream provider used for schedules and scores
    pub provider: ProviderKind,
    /// MySportsFeeds API key, sent as the Basic auth username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// MySportsFeeds Basic auth password
    pub api_password: String,
    pub mysportsfeeds_base_url: String,
    pub espn_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests
    pub http_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderKind::default(),
            api_key: None,
            api_password: providers::MYSPORTSFEEDS_DEFAULT_PASSWORD.to_string(),
            mysportsfeeds_base_url: providers::MYSPORTSFEEDS_BASE_URL.to_string(),
            espn_base_url: providers::ESPN_BASE_URL.to_string(),
            log_file_path: None,
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location,
    /// falling back to defaults when no file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `SPORT_SCHEDULE_PROVIDER` - Override provider (`espn` or `mysportsfeeds`)
    /// - `SPORT_SCHEDULE_API_KEY` - Override the MySportsFeeds API key
    /// - `SPORT_SCHEDULE_LOG_FILE` - Override log file path
    /// - `SPORT_SCHEDULE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 15)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides from an environment lookup. Empty values are ignored,
    /// as is a timeout that is not a number.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(provider) = lookup(env_vars::PROVIDER) {
            self.provider = provider.parse()?;
        }

        if let Some(api_key) = lookup(env_vars::API_KEY) {
            self.api_key = Some(api_key);
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) =
            lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.trim().parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Human-readable summary of the effective settings with the API key masked
    pub fn describe(&self, config_path: &str) -> String {
        let rule = "────────────────────────────────────";
        let api_key = match &self.api_key {
            Some(key) => mask_secret(key),
            None => "(not set)".to_string(),
        };
        let log_file = match &self.log_file_path {
            Some(custom_path) => custom_path.clone(),
            None => format!(
                "{}/sport_schedule.log\n(Default location)",
                get_log_dir_path()
            ),
        };

        [
            "Current Configuration".to_string(),
            rule.to_string(),
            format!("Config Location:\n{config_path}"),
            rule.to_string(),
            format!("Provider:\n{}", self.provider),
            rule.to_string(),
            format!("API Key:\n{api_key}"),
            rule.to_string(),
            format!("MySportsFeeds URL:\n{}", self.mysportsfeeds_base_url),
            format!("ESPN URL:\n{}", self.espn_base_url),
            rule.to_string(),
            format!("HTTP Timeout:\n{} seconds", self.http_timeout_seconds),
            rule.to_string(),
            format!("Log File Location:\n{log_file}"),
        ]
        .join("\n")
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let config = Config::load().await?;

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Using defaults.");
        }
        println!("\n{}", config.describe(&config_path));

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory
    /// when needed. Base URLs are stored without trailing slashes.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            mysportsfeeds_base_url: self.mysportsfeeds_base_url.trim_end_matches('/').to_string(),
            espn_base_url: self.espn_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Keeps the last four characters of a secret
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
provider = "mysportsfeeds"
api_key = "abc123"
log_file_path = "/custom/log/path"
http_timeout_seconds = 20
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.provider, ProviderKind::MySportsFeeds);
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 20);
        // Unspecified fields keep their defaults
        assert_eq!(config.espn_base_url, providers::ESPN_BASE_URL);
        assert_eq!(
            config.api_password,
            providers::MYSPORTSFEEDS_DEFAULT_PASSWORD
        );
    }

    #[tokio::test]
    async fn test_config_load_empty_file_gives_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "provider = [").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_save_creates_directory_and_roundtrips() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("sport_schedule");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let original = Config {
            provider: ProviderKind::MySportsFeeds,
            api_key: Some("abc123".to_string()),
            espn_base_url: "https://espn.example.com/apis/".to_string(),
            ..Config::default()
        };
        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_dir.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("provider = \"mysportsfeeds\""), "{content}");

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.provider, ProviderKind::MySportsFeeds);
        assert_eq!(loaded.api_key, original.api_key);
        assert_eq!(loaded.espn_base_url, "https://espn.example.com/apis");
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            (env_vars::PROVIDER, "msf"),
            (env_vars::API_KEY, "env-key"),
            (env_vars::LOG_FILE, "/env/log/path.log"),
            (env_vars::HTTP_TIMEOUT, "30"),
        ]);
        let mut config = Config::default();
        config
            .apply_env_overrides(|name| vars.get(name).cloned())
            .unwrap();

        assert_eq!(config.provider, ProviderKind::MySportsFeeds);
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.log_file_path.as_deref(), Some("/env/log/path.log"));
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[test]
    fn test_env_overrides_ignore_empty_and_unparsable_values() {
        let vars = env(&[(env_vars::API_KEY, "  "), (env_vars::HTTP_TIMEOUT, "soon")]);
        let mut config = Config::default();
        config
            .apply_env_overrides(|name| vars.get(name).cloned())
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_override_rejects_unknown_provider() {
        let vars = env(&[(env_vars::PROVIDER, "yahoo")]);
        let mut config = Config::default();
        let result = config.apply_env_overrides(|name| vars.get(name).cloned());
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_describe_masks_api_key() {
        let config = Config {
            api_key: Some("supersecret1234".to_string()),
            ..Config::default()
        };
        let description = config.describe("/tmp/config.toml");
        assert!(description.contains("***********1234"));
        assert!(!description.contains("supersecret"));
        assert!(description.contains("Provider:\nespn"));
        assert!(description.contains("15 seconds"));
    }

    #[test]
    fn test_mask_secret_short_values() {
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "");
    }
}
