//! MySportsFeeds: credentialed, season-keyed provider

use async_trait::async_trait;
use chrono::{Local, NaiveDate, Utc};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::Provider;
use super::fetch_utils::fetch_json;
use super::parsing::{ScoreValue, score_or_zero, start_time_or_now};
use crate::error::AppError;
use crate::models::{Game, GameStatus, League};
use crate::season::season;

#[derive(Debug, Clone, Deserialize)]
pub struct MsfGamesResponse {
    #[serde(default)]
    pub games: Vec<MsfGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MsfGame {
    pub schedule: MsfSchedule,
    #[serde(default)]
    pub score: MsfScore,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MsfSchedule {
    pub id: i64,
    #[serde(rename = "startTime", default)]
    pub start_time: String,
    #[serde(rename = "awayTeam")]
    pub away_team: MsfTeam,
    #[serde(rename = "homeTeam")]
    pub home_team: MsfTeam,
    #[serde(rename = "playedStatus", default)]
    pub played_status: Option<String>,
    #[serde(rename = "delayedOrPostponedReason", default)]
    pub delayed_or_postponed_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MsfTeam {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
}

impl MsfTeam {
    /// `"{city} {name}"`, or whichever half is present
    pub fn display_name(&self) -> String {
        format!("{} {}", self.city.trim(), self.name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MsfScore {
    #[serde(rename = "awayScoreTotal", default)]
    pub away_score_total: Option<ScoreValue>,
    #[serde(rename = "homeScoreTotal", default)]
    pub home_score_total: Option<ScoreValue>,
}

/// Maps `playedStatus` onto the display status
pub fn map_played_status(played_status: Option<&str>) -> GameStatus {
    match played_status {
        Some("COMPLETED") | Some("COMPLETED_PENDING_REVIEW") => GameStatus::Final,
        Some("LIVE") => GameStatus::InProgress,
        Some("POSTPONED") => GameStatus::Postponed,
        _ => GameStatus::Scheduled,
    }
}

/// Converts a games response into domain games for `league`
pub fn map_games_response(response: MsfGamesResponse, league: League) -> Vec<Game> {
    response
        .games
        .into_iter()
        .map(|game| {
            let schedule = game.schedule;
            let game_id = schedule.id.to_string();
            let start_time = start_time_or_now(&schedule.start_time, &game_id);
            let status = map_played_status(schedule.played_status.as_deref());

            if let Some(reason) = schedule.delayed_or_postponed_reason.as_deref() {
                debug!("Game {game_id} delayed or postponed: {reason}");
            }

            Game::new(
                schedule.home_team.display_name(),
                schedule.away_team.display_name(),
                start_time,
                league,
            )
            .with_status(status)
            .with_scores(
                score_or_zero(game.score.away_score_total.as_ref()),
                score_or_zero(game.score.home_score_total.as_ref()),
            )
            .with_game_id(game_id)
        })
        .collect()
}

/// `{base}/{league}/{season}/games.json?fordate=YYYYMMDD`
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sport_schedule::providers::mysportsfeeds::build_games_url;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let url = build_games_url("https://api.example.com", "nba", "2023-2024-regular", date);
/// assert_eq!(url, "https://api.example.com/nba/2023-2024-regular/games.json?fordate=20240315");
/// ```
pub fn build_games_url(base_url: &str, league: &str, season: &str, date: NaiveDate) -> String {
    format!(
        "{base_url}/{league}/{season}/games.json?fordate={}",
        date.format("%Y%m%d")
    )
}

/// `{base}/{league}/{season}/games/{game_id}/playerstats.json`
pub fn build_player_stats_url(base_url: &str, league: &str, season: &str, game_id: &str) -> String {
    format!("{base_url}/{league}/{season}/games/{game_id}/playerstats.json")
}

/// `{base}/{league}/{season}/standings.json`
pub fn build_standings_url(base_url: &str, league: &str, season: &str) -> String {
    format!("{base_url}/{league}/{season}/standings.json")
}

pub struct MySportsFeedsProvider {
    client: Client,
    base_url: String,
    /// Basic credential as (api key, password)
    credentials: Option<(String, String)>,
}

impl MySportsFeedsProvider {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        MySportsFeedsProvider {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials: api_key
                .filter(|key| !key.trim().is_empty())
                .map(|key| (key, password)),
        }
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.credentials {
            Some((key, password)) => request.basic_auth(key, Some(password)),
            None => request,
        }
    }

    /// Season for pass-through calls that are not tied to a date
    fn current_season(league: League) -> String {
        season(league.slug(), Utc::now().with_timezone(&Local).date_naive())
    }
}

#[async_trait]
impl Provider for MySportsFeedsProvider {
    fn name(&self) -> &str {
        "MySportsFeeds"
    }

    #[instrument(skip(self))]
    async fn fetch_league_games(
        &self,
        league: League,
        date: NaiveDate,
    ) -> Result<Vec<Game>, AppError> {
        let season = season(league.slug(), date);
        let url = build_games_url(&self.base_url, league.slug(), &season, date);
        let response: MsfGamesResponse = fetch_json(self.get(&url), &url).await?;
        Ok(map_games_response(response, league))
    }

    #[instrument(skip(self))]
    async fn fetch_player_stats(&self, league: League, game_id: &str) -> Result<Value, AppError> {
        let season = Self::current_season(league);
        let url = build_player_stats_url(&self.base_url, league.slug(), &season, game_id);
        fetch_json(self.get(&url), &url).await
    }

    #[instrument(skip(self))]
    async fn fetch_standings(&self, league: League) -> Result<Value, AppError> {
        let season = Self::current_season(league);
        let url = build_standings_url(&self.base_url, league.slug(), &season);
        fetch_json(self.get(&url), &url).await
    }
}
