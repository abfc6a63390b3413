use crate::constants::env_vars;
use crate::models::GameStatus;
use crossterm::style::{Color, Stylize};

/// Whether the report may contain ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    Enabled,
    Disabled,
}

impl ColorPolicy {
    /// Reads `NO_COLOR` and `TERM` from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_values(
            std::env::var(env_vars::NO_COLOR).ok().as_deref(),
            std::env::var(env_vars::TERM).ok().as_deref(),
        )
    }

    /// A non-empty `NO_COLOR` disables colour, as does a missing, empty or `dumb` `TERM`.
    pub fn from_env_values(no_color: Option<&str>, term: Option<&str>) -> Self {
        if no_color.is_some_and(|value| !value.is_empty()) {
            return ColorPolicy::Disabled;
        }
        match term {
            None | Some("") | Some("dumb") => ColorPolicy::Disabled,
            Some(_) => ColorPolicy::Enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ColorPolicy::Enabled)
    }
}

/// A foreground colour with optional bold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub color: Color,
    pub bold: bool,
}

impl Paint {
    pub const fn plain(color: Color) -> Self {
        Paint { color, bold: false }
    }

    pub const fn bold(color: Color) -> Self {
        Paint { color, bold: true }
    }

    /// Applies the colour when the policy allows it, otherwise returns `text` unchanged.
    pub fn apply(&self, text: &str, policy: ColorPolicy) -> String {
        if !policy.is_enabled() {
            return text.to_string();
        }
        let styled = text.with(self.color);
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

pub const HEADER: Paint = Paint::bold(Color::White);
pub const RULE: Paint = Paint::plain(Color::Blue);
pub const SECTION: Paint = Paint::bold(Color::Yellow);
pub const TIME: Paint = Paint::bold(Color::DarkMagenta);
pub const MATCHUP: Paint = Paint::plain(Color::White);
pub const RECORD: Paint = Paint::plain(Color::Grey);

/// Colour for a status line: live green, postponed or delayed yellow,
/// final magenta, scheduled cyan, anything else white.
pub fn status_paint(status: &GameStatus) -> Paint {
    match status {
        GameStatus::InProgress => Paint::bold(Color::Green),
        GameStatus::Postponed => Paint::bold(Color::Yellow),
        GameStatus::Final => Paint::plain(Color::Magenta),
        GameStatus::Scheduled => Paint::plain(Color::DarkCyan),
        GameStatus::Other(description) => {
            if description.contains("Live") || description.contains("Halftime") {
                Paint::bold(Color::Green)
            } else if description.contains("Delayed") || description.contains("Postponed") {
                Paint::bold(Color::Yellow)
            } else if description.contains("Final") || description.contains("Completed") {
                Paint::plain(Color::Magenta)
            } else {
                Paint::plain(Color::White)
            }
        }
    }
}
