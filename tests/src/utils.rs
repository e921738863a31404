#![cfg(test)]
use guessr_common::game::{Difficulty, GuessOutcome};
use guessr_core::{FixedTarget, GameSession};

/// Session with a round already started against a known target.
pub fn round(difficulty: Difficulty, target: i64) -> GameSession<FixedTarget> {
    let mut session = GameSession::new(FixedTarget(target));
    session.start(difficulty);
    session
}

/// Submits every guess in order and collects the outcomes.
pub fn play(session: &mut GameSession<FixedTarget>, guesses: &[&str]) -> Vec<GuessOutcome> {
    guesses
        .iter()
        .map(|raw| session.guess(raw).expect("round should be in progress"))
        .collect()
}
