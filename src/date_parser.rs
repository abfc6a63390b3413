//! Turns the user's `--date` token into a calendar date

use crate::error::AppError;
use chrono::{Local, NaiveDate, NaiveTime, Utc};
use tracing::debug;

/// `MM-DD-YYYY`, tried first
const US_DATE_FORMAT: &str = "%m-%d-%Y";
/// `YYYY-MM-DD`, tried second
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `today`, `tomorrow` (case-insensitive), `MM-DD-YYYY` or `YYYY-MM-DD`.
///
/// Relative tokens are resolved against the current local date.
///
/// # Examples
///
/// ```
/// use sport_schedule::date_parser::parse_date;
///
/// let date = parse_date("2024-03-15").unwrap();
/// assert_eq!(date.to_string(), "2024-03-15");
/// assert!(parse_date("15.03.2024").is_err());
/// ```
pub fn parse_date(token: &str) -> Result<NaiveDate, AppError> {
    // Use UTC for the clock read, local calendar for the date the user means
    let today = Utc::now().with_timezone(&Local).date_naive();
    parse_date_with_today(token, today)
}

/// Same as [`parse_date`] with an injected "today" for deterministic tests.
pub fn parse_date_with_today(token: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    let trimmed = token.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => {
            return today
                .succ_opt()
                .ok_or_else(|| AppError::invalid_date_format(trimmed));
        }
        _ => {}
    }

    if has_digit_groups(trimmed, &[2, 2, 4])
        && let Ok(date) = NaiveDate::parse_from_str(trimmed, US_DATE_FORMAT)
    {
        debug!("Parsed {trimmed} as MM-DD-YYYY");
        return Ok(date);
    }

    if has_digit_groups(trimmed, &[4, 2, 2])
        && let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
    {
        debug!("Parsed {trimmed} as YYYY-MM-DD");
        return Ok(date);
    }

    Err(AppError::invalid_date_format(trimmed))
}

/// Parses a 24-hour `HH:MM` time of day for the `--from`/`--to` window.
pub fn parse_time_of_day(token: &str) -> Result<NaiveTime, AppError> {
    let trimmed = token.trim();
    if !has_digit_groups_with(trimmed, ':', &[2, 2]) {
        return Err(AppError::invalid_time_of_day(trimmed));
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| AppError::invalid_time_of_day(trimmed))
}

/// Checks that `s` is exactly dash-separated groups of ASCII digits with the given widths.
/// chrono accepts unpadded fields, the accepted layouts do not.
fn has_digit_groups(s: &str, widths: &[usize]) -> bool {
    has_digit_groups_with(s, '-', widths)
}

fn has_digit_groups_with(s: &str, separator: char, widths: &[usize]) -> bool {
    let groups: Vec<&str> = s.split(separator).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, width)| {
                group.len() == *width && group.bytes().all(|b| b.is_ascii_digit())
            })
}
