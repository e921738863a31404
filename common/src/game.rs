//! # Game Model
//!
//! Plain value types describing a round, with no randomness and no IO.
//!
//! * [`difficulty::Difficulty`]: the preset picked from the menu.
//! * [`outcome::GuessOutcome`]: what a single guess evaluated to.
//! * [`outcome::RoundState`]: where a round is in its lifecycle.

pub mod difficulty;
pub mod outcome;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use outcome::{GuessOutcome, RoundState, RoundSummary};
