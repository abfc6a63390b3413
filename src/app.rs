use crate::cli::Args;
use crate::date_parser::{parse_date, parse_time_of_day};
use crate::error::AppError;
use crate::filter::{filter_by_team, filter_by_time_range, limit_games, sort_by_start_time};
use crate::formatter::{ColorPolicy, RenderOptions, no_games_message, render};
use crate::models::{League, LeagueSelection, TimeRange};
use crate::providers::{Provider, fetch_games};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Everything needed to produce one schedule report.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    pub league: String,
    pub date: String,
    pub team: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort: bool,
    pub max_games: usize,
    pub show_scores: bool,
    pub color: ColorPolicy,
}

impl Default for ScheduleRequest {
    fn default() -> Self {
        ScheduleRequest {
            league: "all".to_string(),
            date: "today".to_string(),
            team: String::new(),
            from: None,
            to: None,
            sort: false,
            max_games: 0,
            show_scores: true,
            color: ColorPolicy::Disabled,
        }
    }
}

impl ScheduleRequest {
    pub fn from_args(args: &Args, color: ColorPolicy) -> Self {
        ScheduleRequest {
            league: args.league.clone(),
            date: args.date.clone(),
            team: args.team.clone(),
            from: args.from.clone(),
            to: args.to.clone(),
            sort: args.sort,
            max_games: args.max_games,
            show_scores: !args.no_scores,
            color,
        }
    }
}

/// Parse date, fetch, narrow, then print the report or the "no games" line.
///
/// User input is validated before any request is made. Finding no games is
/// a successful outcome.
#[instrument(skip(provider, request, out), fields(league = %request.league, date = %request.date))]
pub async fn run_schedule<W: Write>(
    provider: &dyn Provider,
    request: &ScheduleRequest,
    out: &mut W,
) -> Result<(), AppError> {
    let date = parse_date(&request.date)?;
    let selection: LeagueSelection = request.league.parse()?;

    let window = if request.from.is_some() || request.to.is_some() {
        let from = request.from.as_deref().map(parse_time_of_day).transpose()?;
        let to = request.to.as_deref().map(parse_time_of_day).transpose()?;
        Some(TimeRange::for_local_window(date, from, to)?)
    } else {
        None
    };

    let mut games = fetch_games(provider, selection, date).await?;
    info!("Fetched {} games for {} on {}", games.len(), selection.label(), date);

    let team = request.team.trim();
    if !team.is_empty() {
        games = filter_by_team(games, team);
        debug!("{} games left after team filter '{}'", games.len(), team);
    }

    if let Some(window) = &window {
        games = filter_by_time_range(games, window);
        debug!("{} games left inside {}", games.len(), window);
    }

    if request.sort {
        sort_by_start_time(&mut games);
    }
    limit_games(&mut games, request.max_games);

    if games.is_empty() {
        let team = (!team.is_empty()).then_some(team);
        writeln!(out, "{}", no_games_message(&request.league, date, team))?;
        return Ok(());
    }

    let options = RenderOptions {
        color: request.color,
        show_scores: request.show_scores,
    };
    write!(out, "{}", render(selection.label(), date, &games, &options))?;
    Ok(())
}

/// Which raw provider document to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderData {
    Standings,
    PlayerStats(String),
}

impl ProviderData {
    pub fn from_args(args: &Args) -> Option<Self> {
        if args.standings {
            Some(ProviderData::Standings)
        } else {
            args.player_stats.clone().map(ProviderData::PlayerStats)
        }
    }
}

/// Fetches standings or player stats for one league and prints them as pretty JSON.
pub async fn run_provider_data<W: Write>(
    provider: &dyn Provider,
    league: &str,
    data: &ProviderData,
    out: &mut W,
) -> Result<(), AppError> {
    let league: League = league.parse()?;
    let document = match data {
        ProviderData::Standings => provider.fetch_standings(league).await?,
        ProviderData::PlayerStats(game_id) => provider.fetch_player_stats(league, game_id).await?,
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, GameStatus};
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticProvider {
        games: Vec<Game>,
        calls: AtomicUsize,
    }

    impl StaticProvider {
        fn new(games: Vec<Game>) -> Self {
            StaticProvider {
                games,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Provider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch_league_games(
            &self,
            league: League,
            _date: NaiveDate,
        ) -> Result<Vec<Game>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .games
                .iter()
                .filter(|game| game.league == league)
                .cloned()
                .collect())
        }

        async fn fetch_standings(&self, league: League) -> Result<Value, AppError> {
            Ok(json!({ "league": league.slug(), "teams": [] }))
        }
    }

    fn games() -> Vec<Game> {
        vec![
            Game::new(
                "Boston Celtics",
                "Miami Heat",
                Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap(),
                League::Nba,
            )
            .with_status(GameStatus::Final)
            .with_scores(102, 110),
            Game::new(
                "Los Angeles Lakers",
                "Golden State Warriors",
                Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap(),
                League::Nba,
            ),
        ]
    }

    fn request(league: &str) -> ScheduleRequest {
        ScheduleRequest {
            league: league.to_string(),
            date: "2024-03-15".to_string(),
            ..ScheduleRequest::default()
        }
    }

    async fn run(provider: &StaticProvider, request: &ScheduleRequest) -> Result<String, AppError> {
        let mut out = Vec::new();
        run_schedule(provider, request, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_renders_report() {
        let provider = StaticProvider::new(games());
        let output = run(&provider, &request("nba")).await.unwrap();
        assert!(output.contains("Sports Schedule for NBA - Friday, March 15, 2024"));
        assert!(output.contains("NBA (2 games)"));
        assert!(output.contains("Final (102-110)"));
        assert!(output.contains("Total games: 2"));
    }

    #[tokio::test]
    async fn test_team_filter_with_no_match_prints_message() {
        let provider = StaticProvider::new(games());
        let request = ScheduleRequest {
            team: "Yankees".to_string(),
            ..request("nba")
        };
        let output = run(&provider, &request).await.unwrap();
        assert_eq!(
            output,
            "No games found for team 'Yankees' on March 15, 2024.\n"
        );
    }

    #[tokio::test]
    async fn test_empty_day_prints_message() {
        let provider = StaticProvider::new(vec![]);
        let output = run(&provider, &request("all")).await.unwrap();
        assert_eq!(output, "No games found for all on March 15, 2024.\n");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_invalid_date_fails_before_fetching() {
        let provider = StaticProvider::new(games());
        let request = ScheduleRequest {
            date: "15/03/2024".to_string(),
            ..request("nba")
        };
        let result = run(&provider, &request).await;
        assert!(matches!(result, Err(AppError::InvalidDateFormat { .. })));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_league_fails_before_fetching() {
        let provider = StaticProvider::new(games());
        let result = run(&provider, &request("xfl")).await;
        assert!(matches!(result, Err(AppError::UnsupportedLeague { .. })));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bad_time_of_day_fails() {
        let provider = StaticProvider::new(games());
        let request = ScheduleRequest {
            from: Some("7pm".to_string()),
            ..request("nba")
        };
        let result = run(&provider, &request).await;
        assert!(matches!(result, Err(AppError::InvalidTimeOfDay { .. })));
    }

    #[tokio::test]
    async fn test_sort_and_max_games() {
        let provider = StaticProvider::new(games());
        let request = ScheduleRequest {
            sort: true,
            max_games: 1,
            ..request("nba")
        };
        let output = run(&provider, &request).await.unwrap();
        assert!(output.contains("Golden State Warriors @ Los Angeles Lakers"));
        assert!(!output.contains("Miami Heat"));
        assert!(output.contains("Total games: 1"));
    }

    #[tokio::test]
    async fn test_standings_are_pretty_printed() {
        let provider = StaticProvider::new(vec![]);
        let mut out = Vec::new();
        run_provider_data(&provider, "nhl", &ProviderData::Standings, &mut out)
            .await
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("\"league\": \"nhl\""));
    }

    #[tokio::test]
    async fn test_unsupported_player_stats_surface_error() {
        let provider = StaticProvider::new(vec![]);
        let mut out = Vec::new();
        let result = run_provider_data(
            &provider,
            "nhl",
            &ProviderData::PlayerStats("1".to_string()),
            &mut out,
        )
        .await;
        assert!(matches!(result, Err(AppError::UnsupportedOperation { .. })));
    }
}
