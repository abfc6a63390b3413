use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// The four supported leagues, in fan-out order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    Nfl,
    Nba,
    Nhl,
    Mlb,
}

impl League {
    pub const ALL: [League; 4] = [League::Nfl, League::Nba, League::Nhl, League::Mlb];

    /// Lowercase code used in upstream URLs and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            League::Nfl => "nfl",
            League::Nba => "nba",
            League::Nhl => "nhl",
            League::Mlb => "mlb",
        }
    }

    /// Uppercase short code used for display and grouping
    pub fn code(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
            League::Nba => "NBA",
            League::Nhl => "NHL",
            League::Mlb => "MLB",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for League {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nfl" => Ok(League::Nfl),
            "nba" => Ok(League::Nba),
            "nhl" => Ok(League::Nhl),
            "mlb" => Ok(League::Mlb),
            _ => Err(AppError::unsupported_league(s.trim())),
        }
    }
}

/// What the user asked for: one league or a fan-out over all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueSelection {
    All,
    Single(League),
}

impl LeagueSelection {
    /// Leagues to query, in request order
    pub fn leagues(&self) -> Vec<League> {
        match self {
            LeagueSelection::All => League::ALL.to_vec(),
            LeagueSelection::Single(league) => vec![*league],
        }
    }

    pub fn is_fan_out(&self) -> bool {
        matches!(self, LeagueSelection::All)
    }

    /// Label for report headers: `ALL` or the league code
    pub fn label(&self) -> &'static str {
        match self {
            LeagueSelection::All => "ALL",
            LeagueSelection::Single(league) => league.code(),
        }
    }
}

impl FromStr for LeagueSelection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(LeagueSelection::All)
        } else {
            s.parse().map(LeagueSelection::Single)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_parse_is_case_insensitive() {
        assert_eq!("nba".parse::<League>().unwrap(), League::Nba);
        assert_eq!("NHL".parse::<League>().unwrap(), League::Nhl);
        assert_eq!(" Mlb ".parse::<League>().unwrap(), League::Mlb);
    }

    #[test]
    fn test_league_parse_rejects_unknown_code() {
        let err = "mls".parse::<League>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLeague { ref league } if league == "mls"));
    }

    #[test]
    fn test_selection_all_fans_out_in_fixed_order() {
        let selection: LeagueSelection = "all".parse().unwrap();
        assert!(selection.is_fan_out());
        assert_eq!(
            selection.leagues(),
            vec![League::Nfl, League::Nba, League::Nhl, League::Mlb]
        );
        assert_eq!(selection.label(), "ALL");
    }

    #[test]
    fn test_selection_single() {
        let selection: LeagueSelection = "nfl".parse().unwrap();
        assert_eq!(selection, LeagueSelection::Single(League::Nfl));
        assert_eq!(selection.leagues(), vec![League::Nfl]);
        assert_eq!(selection.label(), "NFL");
    }

    #[test]
    fn test_selection_unsupported() {
        assert!("cricket".parse::<LeagueSelection>().is_err());
    }

    #[test]
    fn test_codes() {
        assert_eq!(League::Nfl.slug(), "nfl");
        assert_eq!(League::Nfl.code(), "NFL");
        assert_eq!(League::Mlb.to_string(), "MLB");
    }
}
