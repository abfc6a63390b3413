//! Application-wide constants and configuration values
//!
//! Defaults for the HTTP layer, upstream base URLs, environment variable names
//! and report layout widths live here so every module agrees on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 15;

/// Largest timeout accepted from the config file or environment
pub const MAX_HTTP_TIMEOUT_SECONDS: u64 = 300;

/// User agent sent with every upstream request
pub const USER_AGENT: &str = concat!("sport_schedule/", env!("CARGO_PKG_VERSION"));

/// Number of response body characters kept in error messages
pub const ERROR_BODY_SNIPPET_CHARS: usize = 200;

/// Upstream provider defaults
pub mod providers {
    /// MySportsFeeds v2.1 pull API
    pub const MYSPORTSFEEDS_BASE_URL: &str = "https://api.mysportsfeeds.com/v2.1/pull";

    /// Password half of the MySportsFeeds Basic credential; the API key is the username
    pub const MYSPORTSFEEDS_DEFAULT_PASSWORD: &str = "MYSPORTSFEEDS";

    /// ESPN public API root; `site/v2` and `v2` paths hang off it
    pub const ESPN_BASE_URL: &str = "https://site.api.espn.com/apis";
}

/// Environment variable names
pub mod env_vars {
    /// Override the upstream provider (`espn` or `mysportsfeeds`)
    pub const PROVIDER: &str = "SPORT_SCHEDULE_PROVIDER";

    /// Override the MySportsFeeds API key
    pub const API_KEY: &str = "SPORT_SCHEDULE_API_KEY";

    /// Override the log file path
    pub const LOG_FILE: &str = "SPORT_SCHEDULE_LOG_FILE";

    /// Override the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "SPORT_SCHEDULE_HTTP_TIMEOUT";

    /// Any non-empty value disables colored output
    pub const NO_COLOR: &str = "NO_COLOR";

    /// `dumb` or empty disables colored output
    pub const TERM: &str = "TERM";
}

/// Report layout
pub mod layout {
    /// Width of the `=` rules around the whole report
    pub const REPORT_RULE_WIDTH: usize = 60;

    /// Width of the `-` rule under each league header
    pub const SECTION_RULE_WIDTH: usize = 50;

    /// Column width for the local start time
    pub const TIME_COLUMN_WIDTH: usize = 8;

    /// Column width for the `away @ home` matchup
    pub const MATCHUP_COLUMN_WIDTH: usize = 45;
}
