use crate::error::AppError;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;

/// An inclusive window of instants used to narrow a day's games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeRange { start, end }
    }

    /// Builds a range from local wall-clock times on `date`.
    /// A missing bound defaults to the start or end of that day.
    pub fn for_local_window(
        date: NaiveDate,
        from: Option<NaiveTime>,
        to: Option<NaiveTime>,
    ) -> Result<Self, AppError> {
        let from = from.unwrap_or(NaiveTime::MIN);
        let to = match to {
            Some(to) => to,
            None => NaiveTime::from_hms_opt(23, 59, 59)
                .ok_or_else(|| AppError::datetime_parse_error("invalid end of day"))?,
        };

        let start = local_instant(date, from)?;
        let end = local_instant(date, to)?;
        if end < start {
            return Err(AppError::datetime_parse_error(format!(
                "time window ends ({to}) before it starts ({from})"
            )));
        }
        Ok(TimeRange::new(start, end))
    }

    /// True iff `start <= t <= end`
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }
}

fn local_instant(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>, AppError> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            AppError::datetime_parse_error(format!("{date} {time} does not exist in local time"))
        })
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.with_timezone(&Local).format("%-I:%M %p"),
            self.end.with_timezone(&Local).format("%-I:%M %p")
        )
    }
}
