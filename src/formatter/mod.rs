//! Plain-text schedule report, grouped by league.

pub mod colors;

use crate::constants::layout::{
    MATCHUP_COLUMN_WIDTH, REPORT_RULE_WIDTH, SECTION_RULE_WIDTH, TIME_COLUMN_WIDTH,
};
use crate::models::{Game, League};
use chrono::{Local, NaiveDate};
use colors::{HEADER, MATCHUP, RECORD, RULE, SECTION, TIME, status_paint};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub use colors::ColorPolicy;

/// Decorative marker per league code
const LEAGUE_EMBLEMS: &[(&str, &str)] = &[
    ("NFL", "🏈"),
    ("NBA", "🏀"),
    ("NHL", "🏒"),
    ("MLB", "⚾"),
];

/// Emblem for a league code, `None` for codes without one.
pub fn league_emblem(code: &str) -> Option<&'static str> {
    LEAGUE_EMBLEMS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, emblem)| *emblem)
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: ColorPolicy,
    /// When false the `(away-home)` suffix is never shown
    pub show_scores: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: ColorPolicy::Disabled,
            show_scores: true,
        }
    }
}

/// Renders the report for `games` requested as `label` (`NBA`, `ALL`, ...) on `date`.
///
/// Games are grouped by their own league in order of first appearance and
/// keep the received order within a group.
pub fn render(label: &str, date: NaiveDate, games: &[Game], options: &RenderOptions) -> String {
    let policy = options.color;
    let mut out = String::new();

    let header = format!(
        "📅 Sports Schedule for {} - {}",
        label.to_uppercase(),
        date.format("%A, %B %-d, %Y")
    );
    let _ = writeln!(out, "\n{}", HEADER.apply(&header, policy));
    let _ = writeln!(out, "{}", RULE.apply(&"=".repeat(REPORT_RULE_WIDTH), policy));

    for (league, league_games) in group_by_league(games) {
        let section = match league_emblem(league.code()) {
            Some(emblem) => format!("{emblem} {} ({} games)", league.code(), league_games.len()),
            None => format!("{} ({} games)", league.code(), league_games.len()),
        };
        let _ = writeln!(out, "\n{}", SECTION.apply(&section, policy));
        let _ = writeln!(out, "{}", RULE.apply(&"-".repeat(SECTION_RULE_WIDTH), policy));

        for game in league_games {
            let _ = writeln!(out, "{}", game_line(game, options));
        }
    }

    let _ = writeln!(out, "\n{}", RULE.apply(&"=".repeat(REPORT_RULE_WIDTH), policy));
    let _ = writeln!(out, "Total games: {}", games.len());
    out
}

/// One game row: local start time, matchup, status, optional score and records.
fn game_line(game: &Game, options: &RenderOptions) -> String {
    let policy = options.color;
    let time = game
        .start_time
        .with_timezone(&Local)
        .format("%-I:%M %p")
        .to_string();

    let mut status = game.status.to_string();
    if options.show_scores && !game.status.is_scheduled() && game.has_score() {
        let _ = write!(status, " ({}-{})", game.away_score, game.home_score);
    }

    let mut line = format!(
        "  {}  {}  {}",
        TIME.apply(&pad(&time, TIME_COLUMN_WIDTH), policy),
        MATCHUP.apply(&pad(&game.matchup(), MATCHUP_COLUMN_WIDTH), policy),
        status_paint(&game.status).apply(&status, policy)
    );

    if let (Some(away), Some(home)) = (&game.away_record, &game.home_record) {
        let records = format!("[{away} / {home}]");
        let _ = write!(line, "  {}", RECORD.apply(&records, policy));
    }
    line
}

/// Left-aligns `text` to `width` display columns
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn group_by_league(games: &[Game]) -> Vec<(League, Vec<&Game>)> {
    let mut groups: Vec<(League, Vec<&Game>)> = Vec::new();
    for game in games {
        match groups.iter_mut().find(|(league, _)| *league == game.league) {
            Some((_, group)) => group.push(game),
            None => groups.push((game.league, vec![game])),
        }
    }
    groups
}

/// The line printed instead of a report when nothing matched.
pub fn no_games_message(league: &str, date: NaiveDate, team: Option<&str>) -> String {
    let date = date.format("%B %-d, %Y");
    match team.filter(|team| !team.is_empty()) {
        Some(team) => format!("No games found for team '{team}' on {date}."),
        None => format!("No games found for {} on {date}.", league.to_lowercase()),
    }
}
