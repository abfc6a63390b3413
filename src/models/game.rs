use super::league::League;
use chrono::{DateTime, Utc};
use std::fmt;

/// Human-readable game state. Providers with free-text descriptions
/// map onto the known variants where they can and fall back to `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    Postponed,
    Other(String),
}

impl GameStatus {
    /// Normalizes a provider description such as `"Final"` or `"In Progress"`.
    /// Anything unrecognized is kept verbatim; an empty description means scheduled.
    pub fn from_description(description: &str) -> Self {
        let trimmed = description.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "scheduled" => GameStatus::Scheduled,
            "in progress" => GameStatus::InProgress,
            "final" => GameStatus::Final,
            "postponed" => GameStatus::Postponed,
            _ => GameStatus::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::InProgress => "In Progress",
            GameStatus::Final => "Final",
            GameStatus::Postponed => "Postponed",
            GameStatus::Other(description) => description,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, GameStatus::Scheduled)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single game as reported by a provider. Created fresh per fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
    pub start_time: DateTime<Utc>,
    pub league: League,
    pub status: GameStatus,
    pub home_score: u32,
    pub away_score: u32,
    /// Provider-assigned identifier for player stat lookups
    pub game_id: Option<String>,
    pub home_record: Option<String>,
    pub away_record: Option<String>,
}

impl Game {
    /// A scheduled game with zero scores and no optional fields
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        start_time: DateTime<Utc>,
        league: League,
    ) -> Self {
        Game {
            home_team: home_team.into(),
            away_team: away_team.into(),
            start_time,
            league,
            status: GameStatus::Scheduled,
            home_score: 0,
            away_score: 0,
            game_id: None,
            home_record: None,
            away_record: None,
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets scores in away-home order, matching how they are displayed
    pub fn with_scores(mut self, away_score: u32, home_score: u32) -> Self {
        self.away_score = away_score;
        self.home_score = home_score;
        self
    }

    pub fn with_game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    pub fn with_records(
        mut self,
        away_record: Option<String>,
        home_record: Option<String>,
    ) -> Self {
        self.away_record = away_record;
        self.home_record = home_record;
        self
    }

    /// `"{away} @ {home}"`
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }

    /// True once either side has put up points
    pub fn has_score(&self) -> bool {
        self.home_score > 0 || self.away_score > 0
    }
}
