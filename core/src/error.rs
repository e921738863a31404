use thiserror::Error;

/// Guesses submitted while no round is being played.
///
/// A non-numeric guess is not an error; it is reported as
/// [`GuessOutcome::InvalidInput`](guessr_common::game::GuessOutcome::InvalidInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no round has been started")]
    NotStarted,
    #[error("the round is already over, start a new one")]
    RoundOver,
}
