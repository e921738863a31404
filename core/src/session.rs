//! # Game Session
//!
//! One [`GameSession`] drives one round at a time:
//!
//! ```text
//! NotStarted --start--> InProgress --guess--> InProgress
//!                                  \--Correct--> Won
//!                                  \--OutOfAttempts--> Lost
//! ```
//!
//! `start` may be called from any state and replaces the current round.
//! Input that does not parse as an integer is reported as
//! [`GuessOutcome::InvalidInput`] and leaves the round untouched.

use guessr_common::game::{Difficulty, GuessOutcome, RoundState, RoundSummary};
use tracing::{debug, trace};

use crate::error::SessionError;
use crate::score;
use crate::target::{RandomTarget, TargetSource};

#[derive(Debug)]
pub struct GameSession<S = RandomTarget> {
    source: S,
    difficulty: Option<Difficulty>,
    target: i64,
    tries_used: u32,
    state: RoundState,
}

impl GameSession<RandomTarget> {
    /// Session whose targets come from an OS-seeded generator.
    pub fn with_entropy() -> Self {
        Self::new(RandomTarget::from_entropy())
    }

    /// Session whose targets are reproducible for a given `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomTarget::seeded(seed))
    }
}

impl<S: TargetSource> GameSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            difficulty: None,
            target: 0,
            tries_used: 0,
            state: RoundState::NotStarted,
        }
    }

    /// Begins a new round, discarding whatever round was in progress.
    pub fn start(&mut self, difficulty: Difficulty) {
        let upper_bound = difficulty.upper_bound();
        self.difficulty = Some(difficulty);
        self.target = self.source.draw(upper_bound);
        self.tries_used = 0;
        self.state = RoundState::InProgress;

        debug!(%difficulty, target = self.target, "round started");
    }

    /// Evaluates the raw text of one guess.
    ///
    /// A hit is checked before the attempt limit, so a correct guess on the
    /// last allowed try wins the round.
    pub fn guess(&mut self, raw: &str) -> Result<GuessOutcome, SessionError> {
        match self.state {
            RoundState::InProgress => {}
            RoundState::NotStarted => return Err(SessionError::NotStarted),
            RoundState::Won | RoundState::Lost => return Err(SessionError::RoundOver),
        }

        // Only ASCII digits with an optional sign count. Digit separators
        // (`1_000`) and non-ASCII numerals are rejected on purpose.
        let Ok(value) = raw.trim().parse::<i64>() else {
            trace!(raw, "guess is not a number");
            return Ok(GuessOutcome::InvalidInput);
        };

        self.tries_used += 1;
        let outcome = judge(value, self.target, self.tries_used, self.max_attempts());

        match outcome {
            GuessOutcome::Correct => self.state = RoundState::Won,
            GuessOutcome::OutOfAttempts => self.state = RoundState::Lost,
            _ => {}
        }

        trace!(value, tries = self.tries_used, ?outcome, "guess evaluated");
        if self.state.is_terminal() {
            debug!(state = ?self.state, tries = self.tries_used, "round over");
        }

        Ok(outcome)
    }

    /// Attempts left, or `None` for unlimited rounds (and before any round).
    pub fn remaining_attempts(&self) -> Option<u32> {
        self.max_attempts()
            .map(|max| max.saturating_sub(self.tries_used))
    }

    /// Points for the round, available only once it has been won.
    pub fn score(&self) -> Option<u32> {
        (self.state == RoundState::Won).then(|| score::compute(self.tries_used, self.max_attempts()))
    }

    /// The target, once the round is over and it may be shown.
    pub fn revealed_target(&self) -> Option<i64> {
        self.state.is_terminal().then_some(self.target)
    }

    /// Everything the end-of-round dialog needs, once the round is over.
    pub fn summary(&self) -> Option<RoundSummary> {
        let target = self.revealed_target()?;
        Some(RoundSummary {
            difficulty: self.difficulty?,
            target,
            tries_used: self.tries_used,
            score: self.score(),
        })
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn upper_bound(&self) -> Option<i64> {
        self.difficulty.map(Difficulty::upper_bound)
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.difficulty.and_then(Difficulty::max_attempts)
    }

    pub fn tries_used(&self) -> u32 {
        self.tries_used
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> i64 {
        self.target
    }
}

fn judge(value: i64, target: i64, tries_used: u32, max_attempts: Option<u32>) -> GuessOutcome {
    if value == target {
        return GuessOutcome::Correct;
    }
    if max_attempts.is_some_and(|max| tries_used >= max) {
        return GuessOutcome::OutOfAttempts;
    }
    if value > target {
        GuessOutcome::TooHigh
    } else {
        GuessOutcome::TooLow
    }
}
