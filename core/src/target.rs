//! Where round targets come from.
//!
//! [`GameSession`](crate::GameSession) never calls an RNG directly. It asks
//! its [`TargetSource`] for a number, which lets tests pin the target while
//! the binary draws from an OS-seeded generator.

use guessr_common::game::difficulty::LOWER_BOUND;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the secret number for a new round.
pub trait TargetSource {
    /// Returns a number in `[1, upper_bound]`. `upper_bound` is at least 1.
    fn draw(&mut self, upper_bound: i64) -> i64;
}

/// Uniform draws from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomTarget<R = StdRng> {
    rng: R,
}

impl RandomTarget<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator: the same seed yields the same targets.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomTarget<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomTarget<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> TargetSource for RandomTarget<R> {
    fn draw(&mut self, upper_bound: i64) -> i64 {
        self.rng.random_range(LOWER_BOUND..=upper_bound.max(LOWER_BOUND))
    }
}

/// Always yields the same number, pulled into range if needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTarget(pub i64);

impl TargetSource for FixedTarget {
    fn draw(&mut self, upper_bound: i64) -> i64 {
        self.0.clamp(LOWER_BOUND, upper_bound.max(LOWER_BOUND))
    }
}

/// Adapts a closure into a [`TargetSource`].
pub struct FromFn<F>(pub F);

impl<F> TargetSource for FromFn<F>
where
    F: FnMut(i64) -> i64,
{
    fn draw(&mut self, upper_bound: i64) -> i64 {
        (self.0)(upper_bound)
    }
}
