use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::providers::ProviderKind;
use std::path::Path;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.standings || args.player_stats.is_some() {
        let wants = if args.standings {
            "--standings"
        } else {
            "--player-stats"
        };
        if args.league.trim().eq_ignore_ascii_case("all") {
            return Err(AppError::config_error(format!(
                "{wants} requires a single league, e.g. --league nba"
            )));
        }
    }
    if let Some(provider) = &args.provider {
        provider.parse::<ProviderKind>()?;
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-provider, --set-api-key).
///
/// Starts from the file at `config_path` when it exists, otherwise from defaults,
/// applies the requested changes and writes the result back.
pub async fn handle_config_update_command(
    args: &Args,
    config_path: &str,
) -> Result<Config, AppError> {
    let mut config = if Path::new(config_path).exists() {
        Config::load_from_path(config_path).await?
    } else {
        Config::default()
    };

    if let Some(provider) = &args.set_provider {
        config.provider = provider.parse()?;
    }

    if let Some(api_key) = &args.set_api_key {
        let api_key = api_key.trim();
        config.api_key = (!api_key.is_empty()).then(|| api_key.to_string());
    }

    config.validate()?;
    config.save_to_path(config_path).await?;
    info!("Config updated at {config_path}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn test_validate_args_rejects_fan_out_pass_through() {
        let args = Args::parse_from(["sport_schedule", "--standings"]);
        assert!(matches!(validate_args(&args), Err(AppError::Config(_))));

        let args = Args::parse_from(["sport_schedule", "--player-stats", "42"]);
        assert!(validate_args(&args).is_err());

        let args = Args::parse_from(["sport_schedule", "--standings", "-l", "nhl"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_unknown_provider() {
        let args = Args::parse_from(["sport_schedule", "--provider", "yahoo"]);
        assert!(validate_args(&args).is_err());
    }

    #[tokio::test]
    async fn test_config_update_creates_file_from_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("sport_schedule").join("config.toml");
        let config_path = config_path.to_string_lossy().to_string();

        let args = Args::parse_from([
            "sport_schedule",
            "--set-provider",
            "mysportsfeeds",
            "--set-api-key",
            "abc123",
        ]);
        let updated = handle_config_update_command(&args, &config_path)
            .await
            .unwrap();
        assert_eq!(updated.provider, ProviderKind::MySportsFeeds);

        let saved = Config::load_from_path(&config_path).await.unwrap();
        assert_eq!(saved.provider, ProviderKind::MySportsFeeds);
        assert_eq!(saved.api_key.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_config_update_keeps_other_settings() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path = config_path.to_string_lossy().to_string();

        let existing = Config {
            api_key: Some("keep-me".to_string()),
            http_timeout_seconds: 42,
            ..Config::default()
        };
        existing.save_to_path(&config_path).await.unwrap();

        let args = Args::parse_from(["sport_schedule", "--set-provider", "msf"]);
        handle_config_update_command(&args, &config_path)
            .await
            .unwrap();

        let saved = Config::load_from_path(&config_path).await.unwrap();
        assert_eq!(saved.provider, ProviderKind::MySportsFeeds);
        assert_eq!(saved.api_key.as_deref(), Some("keep-me"));
        assert_eq!(saved.http_timeout_seconds, 42);
    }

    #[tokio::test]
    async fn test_config_update_rejects_unknown_provider() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let args = Args::parse_from(["sport_schedule", "--set-provider", "yahoo"]);
        let result = handle_config_update_command(&args, &config_path.to_string_lossy()).await;
        assert!(result.is_err());
        assert!(!config_path.exists());
    }
}
