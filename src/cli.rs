use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the invocation only reads or writes configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || args.set_provider.is_some() || args.set_api_key.is_some()
}

/// Sports schedule viewer for NFL, NBA, NHL and MLB
///
/// Fetches the day's games from ESPN (default, no account needed) or
/// MySportsFeeds (requires an API key) and prints them grouped by league.
///
/// Dates accept 'today', 'tomorrow', MM-DD-YYYY or YYYY-MM-DD.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// League to show games for: nfl, nba, nhl, mlb or all
    #[arg(short, long, default_value = "all")]
    pub league: String,

    /// Date to show: today, tomorrow, MM-DD-YYYY or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    pub date: String,

    /// Only show games where a team name contains this text (e.g. 'Lakers', 'Yankees')
    #[arg(short, long, default_value = "")]
    pub team: String,

    /// Data provider for this run, overriding the config file
    #[arg(long, value_name = "espn|mysportsfeeds")]
    pub provider: Option<String>,

    /// Only show games starting at or after this local time (HH:MM)
    #[arg(long, value_name = "HH:MM", help_heading = "Display Options")]
    pub from: Option<String>,

    /// Only show games starting at or before this local time (HH:MM)
    #[arg(long, value_name = "HH:MM", help_heading = "Display Options")]
    pub to: Option<String>,

    /// Sort games by start time instead of provider order
    #[arg(long, help_heading = "Display Options")]
    pub sort: bool,

    /// Show at most N games, 0 for no limit
    #[arg(long, value_name = "N", default_value_t = 0, help_heading = "Display Options")]
    pub max_games: usize,

    /// Hide scores of started and finished games
    #[arg(long, help_heading = "Display Options")]
    pub no_scores: bool,

    /// Print league standings as JSON (requires a single --league)
    #[arg(long, help_heading = "Provider Data", conflicts_with = "player_stats")]
    pub standings: bool,

    /// Print player statistics for a game as JSON (requires a single --league)
    #[arg(long, value_name = "GAME_ID", help_heading = "Provider Data")]
    pub player_stats: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Save the default provider to the config file
    #[arg(long, value_name = "espn|mysportsfeeds", help_heading = "Configuration")]
    pub set_provider: Option<String>,

    /// Save the MySportsFeeds API key to the config file
    #[arg(long, value_name = "KEY", help_heading = "Configuration")]
    pub set_api_key: Option<String>,

    /// Show debug logs on stderr in addition to the log file
    #[arg(long, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the
    /// default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
