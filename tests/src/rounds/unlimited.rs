#![cfg(test)]
use guessr_common::game::{Difficulty, GuessOutcome, RoundState};

use crate::utils::{play, round};

#[test]
fn first_try_win_scores_full_marks() {
    let mut session = round(Difficulty::Easy, 50);

    assert_eq!(play(&mut session, &["50"]), vec![GuessOutcome::Correct]);
    assert_eq!(session.score(), Some(100));
}

#[test]
fn third_try_win_scores_96() {
    let mut session = round(Difficulty::Easy, 50);

    let outcomes = play(&mut session, &["90", "10", "50"]);

    assert_eq!(
        outcomes,
        vec![GuessOutcome::TooHigh, GuessOutcome::TooLow, GuessOutcome::Correct]
    );
    assert_eq!(session.tries_used(), 3);
    assert_eq!(session.score(), Some(96));
}

#[test]
fn score_never_drops_below_sixty() {
    let mut session = round(Difficulty::Easy, 100);
    for _ in 0..40 {
        assert_eq!(session.guess("1"), Ok(GuessOutcome::TooLow));
    }
    assert_eq!(session.guess("100"), Ok(GuessOutcome::Correct));
    assert_eq!(session.score(), Some(60));
}

#[test]
fn no_attempt_count_at_any_point() {
    let mut session = round(Difficulty::Easy, 20);
    assert_eq!(session.remaining_attempts(), None);
    for raw in ["1", "abc", "99", ""] {
        session.guess(raw).unwrap();
        assert_eq!(session.remaining_attempts(), None);
    }
    session.guess("20").unwrap();
    assert_eq!(session.remaining_attempts(), None);
    assert_eq!(session.state(), RoundState::Won);
}

#[test]
fn garbage_never_consumes_a_try() {
    let mut session = round(Difficulty::Easy, 20);
    // Separators and non-ASCII digits are deliberately not numbers here.
    for raw in ["abc", "", "  ", "1e3", "0x10", "1_000", "٣"] {
        assert_eq!(session.guess(raw), Ok(GuessOutcome::InvalidInput));
    }
    assert_eq!(session.tries_used(), 0);
    assert_eq!(session.state(), RoundState::InProgress);
}
