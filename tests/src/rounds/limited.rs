#![cfg(test)]
use guessr_common::game::{Difficulty, GuessOutcome, RoundState};
use guessr_core::SessionError;
use rstest::rstest;

use crate::utils::{play, round};

#[test]
fn hard_first_try_win() {
    let mut session = round(Difficulty::Hard, 7);

    assert_eq!(play(&mut session, &["7"]), vec![GuessOutcome::Correct]);
    assert_eq!(session.score(), Some(100));
    assert_eq!(session.remaining_attempts(), Some(9));
}

#[test]
fn hard_ten_misses_lose_on_the_tenth() {
    let mut session = round(Difficulty::Hard, 7);
    let guesses = ["1", "2", "3", "4", "5", "6", "8", "9", "10"];

    let outcomes = play(&mut session, &guesses);
    assert!(!outcomes.iter().any(|o| o.ends_round()));
    assert_eq!(session.remaining_attempts(), Some(1));

    assert_eq!(session.guess("11"), Ok(GuessOutcome::OutOfAttempts));
    assert_eq!(session.state(), RoundState::Lost);
    assert_eq!(session.revealed_target(), Some(7));
    assert_eq!(session.guess("7"), Err(SessionError::RoundOver));
}

#[rstest]
#[case(Difficulty::Medium, 20)]
#[case(Difficulty::Hard, 10)]
fn nth_miss_is_out_of_attempts(#[case] difficulty: Difficulty, #[case] limit: u32) {
    let mut session = round(difficulty, 999);

    for i in 1..limit {
        assert_eq!(session.guess("1"), Ok(GuessOutcome::TooLow));
        assert_eq!(session.remaining_attempts(), Some(limit - i));
    }
    assert_eq!(session.guess("1"), Ok(GuessOutcome::OutOfAttempts));
    assert_eq!(session.score(), None);
}

#[rstest]
#[case(Difficulty::Medium, 20, 5)]
#[case(Difficulty::Hard, 10, 10)]
fn win_on_the_final_try(#[case] difficulty: Difficulty, #[case] limit: u32, #[case] expected: u32) {
    let mut session = round(difficulty, 500);

    for _ in 1..limit {
        session.guess("501").unwrap();
    }
    assert_eq!(session.guess("500"), Ok(GuessOutcome::Correct));
    assert_eq!(session.score(), Some(expected));

    let summary = session.summary().unwrap();
    assert_eq!(summary.tries_used, limit);
    assert_eq!(summary.score, Some(expected));
}

#[test]
fn medium_fourth_try_win() {
    let mut session = round(Difficulty::Medium, 250);

    let outcomes = play(&mut session, &["500", "125", "x", "300", "250"]);

    assert_eq!(
        outcomes,
        vec![
            GuessOutcome::TooHigh,
            GuessOutcome::TooLow,
            GuessOutcome::InvalidInput,
            GuessOutcome::TooHigh,
            GuessOutcome::Correct,
        ]
    );
    assert_eq!(session.score(), Some(85));
}

#[test]
fn restart_after_a_loss_begins_fresh() {
    let mut session = round(Difficulty::Hard, 7);
    for _ in 0..10 {
        session.guess("1").unwrap();
    }
    session.start(Difficulty::Medium);

    assert_eq!(session.state(), RoundState::InProgress);
    assert_eq!(session.remaining_attempts(), Some(20));
    assert_eq!(session.revealed_target(), None);
}
