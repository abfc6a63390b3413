//! Sports schedule viewer for NFL, NBA, NHL and MLB.
//!
//! Fetches a day's games from an upstream provider, optionally narrows them
//! by team or time of day, and renders a plain-text report grouped by league.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sport_schedule::config::Config;
//! use sport_schedule::error::AppError;
//! use sport_schedule::formatter::{RenderOptions, render};
//! use sport_schedule::models::LeagueSelection;
//! use sport_schedule::providers::{create_provider, fetch_games};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let provider = create_provider(&config)?;
//!
//!     let date = sport_schedule::date_parser::parse_date("2024-03-15")?;
//!     let games = fetch_games(provider.as_ref(), LeagueSelection::All, date).await?;
//!
//!     print!("{}", render("all", date, &games, &RenderOptions::default()));
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod date_parser;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod providers;
pub mod season;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{Game, GameStatus, League, LeagueSelection, TimeRange};
pub use providers::{Provider, ProviderKind, create_provider, fetch_games};
