//! Field-level parsing shared by the provider mappers

use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

/// Minute-precision UTC layout, e.g. `2024-03-15T23:30Z`
const MINUTE_PRECISION_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// A score as it appears on the wire: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(i64),
    Text(String),
}

impl ScoreValue {
    /// The score as a non-negative integer. Empty, negative or
    /// non-numeric values count as zero.
    pub fn value(&self) -> u32 {
        match self {
            ScoreValue::Number(n) => u32::try_from(*n).unwrap_or(0),
            ScoreValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return 0;
                }
                trimmed.parse::<u32>().unwrap_or_else(|_| {
                    debug!("Ignoring non-numeric score {trimmed:?}");
                    0
                })
            }
        }
    }
}

/// Score of an optional wire value, zero when absent
pub fn score_or_zero(score: Option<&ScoreValue>) -> u32 {
    score.map(ScoreValue::value).unwrap_or(0)
}

/// Parses a start timestamp as RFC 3339, then as minute-precision UTC.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, MINUTE_PRECISION_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| AppError::datetime_parse_error(format!("'{raw}': {e}")))
}

/// Start time for a game, substituting the current instant when the timestamp
/// matches neither accepted layout.
pub fn start_time_or_now(raw: &str, game_ref: &str) -> DateTime<Utc> {
    match parse_start_time(raw) {
        Ok(start) => start,
        Err(e) => {
            warn!("Could not parse start time for game {game_ref}: {e}; using current time");
            Utc::now()
        }
    }
}
