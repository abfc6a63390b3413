pub mod game;
pub mod league;
pub mod time_range;

pub use game::{Game, GameStatus};
pub use league::{League, LeagueSelection};
pub use time_range::TimeRange;
