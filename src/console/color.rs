//! The sixteen classic console colors.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// A console foreground or background color.
///
/// Names follow the classic 16-color console palette; in configuration files
/// they are written in kebab-case (`dark-cyan`, `gray`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    /// All colors, in palette order.
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// Kebab-case name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ConsoleColor::Black => "black",
            ConsoleColor::DarkBlue => "dark-blue",
            ConsoleColor::DarkGreen => "dark-green",
            ConsoleColor::DarkCyan => "dark-cyan",
            ConsoleColor::DarkRed => "dark-red",
            ConsoleColor::DarkMagenta => "dark-magenta",
            ConsoleColor::DarkYellow => "dark-yellow",
            ConsoleColor::Gray => "gray",
            ConsoleColor::DarkGray => "dark-gray",
            ConsoleColor::Blue => "blue",
            ConsoleColor::Green => "green",
            ConsoleColor::Cyan => "cyan",
            ConsoleColor::Red => "red",
            ConsoleColor::Magenta => "magenta",
            ConsoleColor::Yellow => "yellow",
            ConsoleColor::White => "white",
        }
    }
}

impl From<ConsoleColor> for Color {
    fn from(c: ConsoleColor) -> Self {
        match c {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Gray => Color::Grey,
            ConsoleColor::DarkGray => Color::DarkGrey,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::White => Color::White,
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct UnknownColor(pub String);

impl FromStr for ConsoleColor {
    type Err = UnknownColor;

    /// Accepts the kebab-case name case-insensitively; `grey` spellings work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace("grey", "gray");
        ConsoleColor::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
