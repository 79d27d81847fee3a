//! Reuse and age semantics for admin passwords.
//!
//! Syntactic strength rules live in [`crate::application::validators`] and run
//! at the HTTP boundary; everything here assumes a candidate that already
//! passed them.

use chrono::{Duration, NaiveDateTime};

use crate::infra::password;

/// How many prior password hashes are kept and checked against.
pub const PASSWORD_HISTORY_DEPTH: usize = 3;

/// True when the candidate matches the current password or any of the
/// remembered prior ones. Comparison is cleartext-against-hash via the hasher,
/// never hash equality (hashes are salted).
pub fn is_reused_or_current(candidate: &str, current_hash: &str, history: &[String]) -> bool {
    if password::verify(candidate, current_hash) {
        return true;
    }
    history
        .iter()
        .take(PASSWORD_HISTORY_DEPTH)
        .any(|prior| password::verify(candidate, prior))
}

/// History after a password change: the outgoing hash moves to the front and
/// the oldest entry beyond the depth bound falls off.
pub fn rotate_history(outgoing_hash: &str, history: &[String]) -> Vec<String> {
    let mut rotated = Vec::with_capacity(PASSWORD_HISTORY_DEPTH);
    rotated.push(outgoing_hash.to_string());
    rotated.extend(
        history
            .iter()
            .take(PASSWORD_HISTORY_DEPTH - 1)
            .cloned(),
    );
    rotated
}

/// True exactly when `now - last_password_change_at >= max_age`.
pub fn is_expired(last_password_change_at: NaiveDateTime, max_age: Duration, now: NaiveDateTime) -> bool {
    now - last_password_change_at >= max_age
}
