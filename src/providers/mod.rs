//! Upstream sports-data providers behind a single [`Provider`] capability.
//!
//! Each provider owns its wire schema and mapping into [`Game`]. The fan-out
//! over leagues and its soft-failure policy live in [`fetch_games`] so every
//! provider behaves the same way for `--league all`.

pub mod espn;
pub mod fetch_utils;
pub mod http_client;
pub mod mysportsfeeds;
pub mod parsing;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Game, League, LeagueSelection};
use espn::EspnProvider;
use http_client::create_http_client_with_timeout;
use mysportsfeeds::MySportsFeedsProvider;

/// A source of schedules and scores.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &str;

    /// Games for a single league on `date`
    async fn fetch_league_games(
        &self,
        league: League,
        date: NaiveDate,
    ) -> Result<Vec<Game>, AppError>;

    /// Player statistics for one game as untyped JSON
    async fn fetch_player_stats(
        &self,
        _league: League,
        _game_id: &str,
    ) -> Result<Value, AppError> {
        Err(AppError::unsupported_operation(self.name(), "player stats"))
    }

    /// League standings as untyped JSON
    async fn fetch_standings(&self, _league: League) -> Result<Value, AppError> {
        Err(AppError::unsupported_operation(self.name(), "standings"))
    }
}

/// Which upstream to talk to, chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Espn,
    #[serde(alias = "msf")]
    MySportsFeeds,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Espn => "espn",
            ProviderKind::MySportsFeeds => "mysportsfeeds",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "espn" => Ok(ProviderKind::Espn),
            "mysportsfeeds" | "msf" => Ok(ProviderKind::MySportsFeeds),
            other => Err(AppError::config_error(format!(
                "Unknown provider '{other}'. Use 'espn' or 'mysportsfeeds'"
            ))),
        }
    }
}

/// Builds the configured provider with a client bounded by the configured timeout.
pub fn create_provider(config: &Config) -> Result<Box<dyn Provider>, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let provider: Box<dyn Provider> = match config.provider {
        ProviderKind::Espn => Box::new(EspnProvider::new(client, config.espn_base_url.clone())),
        ProviderKind::MySportsFeeds => Box::new(MySportsFeedsProvider::new(
            client,
            config.mysportsfeeds_base_url.clone(),
            config.api_key.clone(),
            config.api_password.clone(),
        )),
    };
    info!("Using provider: {}", provider.name());
    Ok(provider)
}

/// Fetches games for the selection, one league at a time.
///
/// A single-league request propagates any failure. For `All`, a failing
/// league is logged and skipped so the others still make it into the result.
#[instrument(skip(provider), fields(provider = provider.name()))]
pub async fn fetch_games(
    provider: &dyn Provider,
    selection: LeagueSelection,
    date: NaiveDate,
) -> Result<Vec<Game>, AppError> {
    if !selection.is_fan_out() {
        let mut games = Vec::new();
        for league in selection.leagues() {
            games.append(&mut provider.fetch_league_games(league, date).await?);
        }
        return Ok(games);
    }

    let mut games = Vec::new();
    for league in selection.leagues() {
        match provider.fetch_league_games(league, date).await {
            Ok(mut league_games) => {
                info!("Fetched {} {} games", league_games.len(), league);
                games.append(&mut league_games);
            }
            Err(e) if e.is_fetch_error() => {
                warn!("Could not fetch games for {}: {}", league.slug(), e);
            }
            Err(e) => {
                warn!("Skipping {}: {}", league.slug(), e);
            }
        }
    }
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    /// Serves canned results per league and records the call order
    struct FakeProvider {
        failing: Vec<League>,
        calls: Mutex<Vec<League>>,
    }

    impl FakeProvider {
        fn new(failing: Vec<League>) -> Self {
            FakeProvider {
                failing,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Provider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        async fn fetch_league_games(
            &self,
            league: League,
            _date: NaiveDate,
        ) -> Result<Vec<Game>, AppError> {
            self.calls.lock().unwrap().push(league);
            if self.failing.contains(&league) {
                return Err(AppError::authentication_failure(format!(
                    "https://fake/{}",
                    league.slug()
                )));
            }
            Ok(vec![Game::new(
                format!("{} Home", league.code()),
                format!("{} Away", league.code()),
                Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap(),
                league,
            )])
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_fan_out_is_sequential_in_league_order() {
        let provider = FakeProvider::new(vec![]);
        let games = fetch_games(&provider, LeagueSelection::All, date())
            .await
            .unwrap();

        assert_eq!(games.len(), 4);
        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec![League::Nfl, League::Nba, League::Nhl, League::Mlb]
        );
    }

    #[tokio::test]
    async fn test_fan_out_skips_failing_league() {
        let provider = FakeProvider::new(vec![League::Nhl]);
        let games = fetch_games(&provider, LeagueSelection::All, date())
            .await
            .unwrap();

        assert_eq!(games.len(), 3);
        assert!(games.iter().all(|g| g.league != League::Nhl));
        assert_eq!(provider.calls.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_single_league_failure_propagates() {
        let provider = FakeProvider::new(vec![League::Nba]);
        let result = fetch_games(&provider, LeagueSelection::Single(League::Nba), date()).await;
        assert!(matches!(result, Err(AppError::AuthenticationFailure { .. })));
    }

    #[tokio::test]
    async fn test_single_league_queries_only_that_league() {
        let provider = FakeProvider::new(vec![]);
        let games = fetch_games(&provider, LeagueSelection::Single(League::Mlb), date())
            .await
            .unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(*provider.calls.lock().unwrap(), vec![League::Mlb]);
    }

    #[tokio::test]
    async fn test_default_pass_through_calls_are_unsupported() {
        let provider = FakeProvider::new(vec![]);
        let stats = provider.fetch_player_stats(League::Nfl, "1").await;
        let standings = provider.fetch_standings(League::Nfl).await;
        assert!(matches!(stats, Err(AppError::UnsupportedOperation { .. })));
        assert!(matches!(
            standings,
            Err(AppError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("espn".parse::<ProviderKind>().unwrap(), ProviderKind::Espn);
        assert_eq!(
            "MySportsFeeds".parse::<ProviderKind>().unwrap(),
            ProviderKind::MySportsFeeds
        );
        assert_eq!(
            "msf".parse::<ProviderKind>().unwrap(),
            ProviderKind::MySportsFeeds
        );
        assert!("yahoo".parse::<ProviderKind>().is_err());
        assert_eq!(ProviderKind::MySportsFeeds.to_string(), "mysportsfeeds");
    }

    #[test]
    fn test_create_provider_follows_config() {
        let mut config = Config::default();
        assert_eq!(create_provider(&config).unwrap().name(), "ESPN");

        config.provider = ProviderKind::MySportsFeeds;
        assert_eq!(create_provider(&config).unwrap().name(), "MySportsFeeds");
    }
}
