//! # Difficulty Presets
//!
//! Each preset fixes the upper bound of the guessing range (the lower bound
//! is always `1`) and an optional attempt limit.
//!
//! | preset | range    | attempts  |
//! |--------|----------|-----------|
//! | easy   | 1-100    | unlimited |
//! | medium | 1-1000   | 20        |
//! | hard   | 1-1000   | 10        |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Lowest number a target can be.
pub const LOWER_BOUND: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    /// All presets, in the order the menu lists them.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Inclusive upper bound of the target range.
    pub fn upper_bound(self) -> i64 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium | Difficulty::Hard => 1000,
        }
    }

    /// Attempt limit, or `None` when the player may guess forever.
    pub fn max_attempts(self) -> Option<u32> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(20),
            Difficulty::Hard => Some(10),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Menu text, e.g. `Medium (1-1000, 20 tries)`.
    pub fn label(self) -> String {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        let tries = match self.max_attempts() {
            Some(n) => format!("{n} tries"),
            None => String::from("unlimited"),
        };
        format!("{name} ({LOWER_BOUND}-{}, {tries})", self.upper_bound())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts the identifiers (`easy`, `medium`, `hard`), their first
    /// letter, or the menu position (`1`, `2`, `3`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Difficulty::Easy),
            "medium" | "m" | "2" => Ok(Difficulty::Medium),
            "hard" | "h" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.trim().to_string())),
        }
    }
}
