//! Points awarded for a win.
//!
//! * Unlimited rounds start at 100 and lose 2 points per extra try, never
//!   dropping below 60.
//! * Limited rounds score the share of attempts left when the winning guess
//!   was made, counting the winning try itself.

pub const MAX_SCORE: u32 = 100;
pub const UNLIMITED_FLOOR: u32 = 60;
const UNLIMITED_PENALTY: u32 = 2;

/// Score for a win on try number `tries_used` (1-based).
pub fn compute(tries_used: u32, max_attempts: Option<u32>) -> u32 {
    match max_attempts {
        None => {
            let penalty = tries_used.saturating_sub(1).saturating_mul(UNLIMITED_PENALTY);
            MAX_SCORE.saturating_sub(penalty).max(UNLIMITED_FLOOR)
        }
        Some(0) => 0,
        Some(max) => {
            let remaining_at_win = max.saturating_sub(tries_used).saturating_add(1).min(max);
            remaining_at_win * MAX_SCORE / max
        }
    }
}
