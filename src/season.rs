//! Season identifiers for season-keyed providers

use chrono::{Datelike, NaiveDate};

/// NFL regular season opens in September
const NFL_SEASON_START_MONTH: u32 = 9;
/// NBA and NHL regular seasons open in October and straddle New Year
const WINTER_SEASON_START_MONTH: u32 = 10;

/// Maps a league code and date to the provider's season string.
///
/// - `nfl`: `"{year}-regular"`, where dates before September belong to the previous year
/// - `nba`, `nhl`: `"{start}-{start+1}-regular"`, rolling over in October
/// - `mlb` and anything unknown: the calendar year, `"{year}-regular"`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sport_schedule::season::season;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(season("nba", date), "2023-2024-regular");
/// assert_eq!(season("nfl", date), "2023-regular");
/// ```
pub fn season(league: &str, date: NaiveDate) -> String {
    let year = date.year();
    let month = date.month();

    match league.to_ascii_lowercase().as_str() {
        "nfl" => {
            if month >= NFL_SEASON_START_MONTH {
                format!("{year}-regular")
            } else {
                format!("{}-regular", year - 1)
            }
        }
        "nba" | "nhl" => {
            if month >= WINTER_SEASON_START_MONTH {
                format!("{}-{}-regular", year, year + 1)
            } else {
                format!("{}-{}-regular", year - 1, year)
            }
        }
        _ => format!("{year}-regular"),
    }
}
