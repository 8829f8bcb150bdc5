//! Length section - minimum length requirement and long-password bonus.

/// Minimum character count for the length requirement.
pub const MIN_LENGTH: usize = 8;

/// Character count at which the long-password bonus applies.
const BONUS_LENGTH: usize = 12;

pub const MSG_TOO_SHORT: &str = "Password must be at least 8 characters";

/// Checks the minimum length requirement.
///
/// Counts characters, not bytes, so multi-byte input is not over-credited.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

/// Checks whether the password earns the long-password bonus.
///
/// Additive with the length requirement itself; both apply to a long
/// password.
pub fn earns_length_bonus(password: &str) -> bool {
    password.chars().count() >= BONUS_LENGTH
}
