use crate::game::Difficulty;

/// Result of evaluating one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The guess is below the target.
    TooLow,
    /// The guess is above the target.
    TooHigh,
    /// The guess hit the target. The round is won.
    Correct,
    /// The guess missed and used the last allowed attempt. The round is lost.
    OutOfAttempts,
    /// The text was not an integer. No attempt was consumed.
    InvalidInput,
}

impl GuessOutcome {
    /// Whether this outcome ends the round.
    pub fn ends_round(self) -> bool {
        matches!(self, GuessOutcome::Correct | GuessOutcome::OutOfAttempts)
    }
}

/// Lifecycle of a round: `NotStarted -> InProgress -> (Won | Lost)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundState::Won | RoundState::Lost)
    }
}

/// What the end-of-round dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub difficulty: Difficulty,
    pub target: i64,
    pub tries_used: u32,
    /// Present for wins only.
    pub score: Option<u32>,
}

impl RoundSummary {
    pub fn is_win(&self) -> bool {
        self.score.is_some()
    }
}
