use crate::models::{Game, TimeRange};

/// Keeps games where either team name contains `needle`, ignoring case.
/// Input order is preserved and an empty result is not an error.
pub fn filter_by_team(games: Vec<Game>, needle: &str) -> Vec<Game> {
    let needle = needle.to_lowercase();
    games
        .into_iter()
        .filter(|game| {
            game.home_team.to_lowercase().contains(&needle)
                || game.away_team.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Keeps games whose start falls inside `range` (inclusive).
pub fn filter_by_time_range(games: Vec<Game>, range: &TimeRange) -> Vec<Game> {
    games
        .into_iter()
        .filter(|game| range.contains(game.start_time))
        .collect()
}

/// Stable sort by start time; games starting together keep their received order.
pub fn sort_by_start_time(games: &mut [Game]) {
    games.sort_by_key(|game| game.start_time);
}

/// Truncates to at most `max_games`. Zero means no limit.
pub fn limit_games(games: &mut Vec<Game>, max_games: usize) {
    if max_games > 0 {
        games.truncate(max_games);
    }
}
