#![cfg(test)]
use guessr_common::game::{Difficulty, GuessOutcome};
use guessr_core::{FixedTarget, GameSession, TargetSource};
use proptest::prelude::*;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

/// Bisects with the hints; only succeeds if the target lies in `[1, upper]`.
fn bisect<S: TargetSource>(session: &mut GameSession<S>, upper: i64) -> Option<i64> {
    let (mut lo, mut hi) = (1, upper);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match session.guess(&mid.to_string()) {
            Ok(GuessOutcome::Correct) => return Some(mid),
            Ok(GuessOutcome::TooLow) => lo = mid + 1,
            Ok(GuessOutcome::TooHigh) => hi = mid - 1,
            _ => return None,
        }
    }
    None
}

proptest! {
    #[test]
    fn seeded_targets_stay_in_range(seed: u64, difficulty in difficulty()) {
        let mut session = GameSession::seeded(seed);
        for _ in 0..50 {
            session.start(difficulty);
            let found = bisect(&mut session, difficulty.upper_bound());
            prop_assert!(found.is_some(), "target outside 1..={}", difficulty.upper_bound());
            prop_assert_eq!(found, session.revealed_target());
        }
    }

    #[test]
    fn exact_guess_always_wins(target in 1i64..=1000, misses in 0u32..10) {
        let mut session = GameSession::new(FixedTarget(target));
        session.start(Difficulty::Hard);
        let miss = if target == 1000 { "1001" } else { "1000" };
        for _ in 0..misses {
            prop_assert_ne!(session.guess(miss), Ok(GuessOutcome::Correct));
        }
        prop_assert_eq!(session.guess(&target.to_string()), Ok(GuessOutcome::Correct));
    }

    #[test]
    fn non_numeric_text_is_free(text in "[^0-9+-]*") {
        let mut session = GameSession::new(FixedTarget(5));
        session.start(Difficulty::Medium);
        prop_assert_eq!(session.guess(&text), Ok(GuessOutcome::InvalidInput));
        prop_assert_eq!(session.tries_used(), 0);
        prop_assert_eq!(session.remaining_attempts(), Some(20));
    }

    #[test]
    fn hints_point_toward_the_target(target in 1i64..=100, value in -1000i64..=1000) {
        let mut session = GameSession::new(FixedTarget(target));
        session.start(Difficulty::Easy);
        let expected = match value.cmp(&target) {
            std::cmp::Ordering::Less => GuessOutcome::TooLow,
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
            std::cmp::Ordering::Equal => GuessOutcome::Correct,
        };
        prop_assert_eq!(session.guess(&value.to_string()), Ok(expected));
    }
}
