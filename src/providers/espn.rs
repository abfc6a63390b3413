//! ESPN public scoreboard: date-keyed provider, no credentials

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::Provider;
use super::fetch_utils::fetch_json;
use super::parsing::{ScoreValue, score_or_zero, start_time_or_now};
use crate::error::AppError;
use crate::models::{Game, GameStatus, League};

#[derive(Debug, Clone, Deserialize)]
pub struct EspnScoreboard {
    #[serde(default)]
    pub events: Vec<EspnEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub competitions: Vec<EspnCompetition>,
    #[serde(default)]
    pub status: Option<EspnStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnCompetition {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub competitors: Vec<EspnCompetitor>,
    #[serde(default)]
    pub status: Option<EspnStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway", default)]
    pub home_away: String,
    #[serde(default)]
    pub team: EspnTeam,
    #[serde(default)]
    pub score: Option<ScoreValue>,
    #[serde(default)]
    pub records: Vec<EspnRecord>,
}

impl EspnCompetitor {
    /// Overall record summary, falling back to the first record listed
    pub fn record_summary(&self) -> Option<String> {
        self.records
            .iter()
            .find(|r| r.record_type.as_deref() == Some("total"))
            .or_else(|| self.records.first())
            .and_then(|r| r.summary.clone())
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EspnTeam {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl EspnTeam {
    pub fn full_name(&self) -> String {
        if !self.display_name.trim().is_empty() {
            return self.display_name.trim().to_string();
        }
        let joined = format!(
            "{} {}",
            self.location.as_deref().unwrap_or_default().trim(),
            self.name.as_deref().unwrap_or_default().trim()
        );
        let joined = joined.trim();
        if joined.is_empty() {
            self.abbreviation.clone().unwrap_or_else(|| "TBD".to_string())
        } else {
            joined.to_string()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnRecord {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: EspnStatusType,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EspnStatusType {
    #[serde(default)]
    pub name: Option<String>,
    /// `pre`, `in` or `post`
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// ESPN passes a free-text description through; without one the
/// coarse `state` decides.
pub fn map_status(status: Option<&EspnStatusType>) -> GameStatus {
    let Some(status) = status else {
        return GameStatus::Scheduled;
    };

    if let Some(description) = status.description.as_deref()
        && !description.trim().is_empty()
    {
        return GameStatus::from_description(description);
    }

    if status.name.as_deref() == Some("STATUS_POSTPONED") {
        return GameStatus::Postponed;
    }

    match status.state.as_deref() {
        Some("post") => GameStatus::Final,
        Some("in") => GameStatus::InProgress,
        _ if status.completed => GameStatus::Final,
        _ => GameStatus::Scheduled,
    }
}

/// Converts a scoreboard into domain games for `league`.
/// Events without both a home and an away competitor are skipped.
pub fn map_scoreboard(scoreboard: EspnScoreboard, league: League) -> Vec<Game> {
    scoreboard
        .events
        .into_iter()
        .filter_map(|event| map_event(event, league))
        .collect()
}

fn map_event(event: EspnEvent, league: League) -> Option<Game> {
    let Some(competition) = event.competitions.first() else {
        debug!("Skipping event {} without competitions", event.id);
        return None;
    };

    let home = competition.competitors.iter().find(|c| c.home_away == "home");
    let away = competition.competitors.iter().find(|c| c.home_away == "away");
    let (Some(home), Some(away)) = (home, away) else {
        debug!("Skipping event {} without home and away competitors", event.id);
        return None;
    };

    let raw_start = competition.date.as_deref().unwrap_or(&event.date);
    let start_time = start_time_or_now(raw_start, &event.id);
    let status = competition
        .status
        .as_ref()
        .or(event.status.as_ref())
        .map(|s| &s.status_type);

    let mut game = Game::new(home.team.full_name(), away.team.full_name(), start_time, league)
        .with_status(map_status(status))
        .with_scores(
            score_or_zero(away.score.as_ref()),
            score_or_zero(home.score.as_ref()),
        )
        .with_records(away.record_summary(), home.record_summary());
    if !event.id.is_empty() {
        game = game.with_game_id(event.id.clone());
    }
    Some(game)
}

/// ESPN's sport path segment for a league
pub fn sport_path(league: League) -> &'static str {
    match league {
        League::Nfl => "football",
        League::Nba => "basketball",
        League::Nhl => "hockey",
        League::Mlb => "baseball",
    }
}

/// `{base}/site/v2/sports/{sport}/{league}/scoreboard?dates=YYYYMMDD`
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sport_schedule::models::League;
/// use sport_schedule::providers::espn::build_scoreboard_url;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let url = build_scoreboard_url("https://api.example.com", League::Nhl, date);
/// assert_eq!(url, "https://api.example.com/site/v2/sports/hockey/nhl/scoreboard?dates=20240315");
/// ```
pub fn build_scoreboard_url(base_url: &str, league: League, date: NaiveDate) -> String {
    format!(
        "{base_url}/site/v2/sports/{}/{}/scoreboard?dates={}",
        sport_path(league),
        league.slug(),
        date.format("%Y%m%d")
    )
}

/// `{base}/site/v2/sports/{sport}/{league}/summary?event={id}`
pub fn build_summary_url(base_url: &str, league: League, game_id: &str) -> String {
    format!(
        "{base_url}/site/v2/sports/{}/{}/summary?event={game_id}",
        sport_path(league),
        league.slug()
    )
}

/// `{base}/v2/sports/{sport}/{league}/standings`
pub fn build_standings_url(base_url: &str, league: League) -> String {
    format!(
        "{base_url}/v2/sports/{}/{}/standings",
        sport_path(league),
        league.slug()
    )
}

pub struct EspnProvider {
    client: Client,
    base_url: String,
}

impl EspnProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        EspnProvider {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Provider for EspnProvider {
    fn name(&self) -> &str {
        "ESPN"
    }

    #[instrument(skip(self))]
    async fn fetch_league_games(
        &self,
        league: League,
        date: NaiveDate,
    ) -> Result<Vec<Game>, AppError> {
        let url = build_scoreboard_url(&self.base_url, league, date);
        let scoreboard: EspnScoreboard = fetch_json(self.client.get(&url), &url).await?;
        Ok(map_scoreboard(scoreboard, league))
    }

    #[instrument(skip(self))]
    async fn fetch_player_stats(&self, league: League, game_id: &str) -> Result<Value, AppError> {
        let url = build_summary_url(&self.base_url, league, game_id);
        fetch_json(self.client.get(&url), &url).await
    }

    #[instrument(skip(self))]
    async fn fetch_standings(&self, league: League) -> Result<Value, AppError> {
        let url = build_standings_url(&self.base_url, league);
        fetch_json(self.client.get(&url), &url).await
    }
}
