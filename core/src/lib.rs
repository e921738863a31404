//! The rules of a guessr round.
//!
//! [`session::GameSession`] is the only stateful piece. Presentation drivers
//! hold one, call [`start`](session::GameSession::start) when a difficulty is
//! picked and forward raw input to [`guess`](session::GameSession::guess).
//! Where the target comes from is decided by a [`target::TargetSource`], so
//! rounds can be made deterministic.

pub mod error;
pub mod score;
pub mod session;
pub mod target;

pub use error::SessionError;
pub use session::GameSession;
pub use target::{FixedTarget, FromFn, RandomTarget, TargetSource};
