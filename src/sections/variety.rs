//! Character variety section - uppercase, lowercase, digit, and special
//! character requirements.

/// The fixed set of characters accepted as "special".
///
/// Anything outside this set (including whitespace and non-ASCII
/// punctuation) does not satisfy the special requirement.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub const MSG_MISSING_UPPERCASE: &str = "Add at least one uppercase letter";
pub const MSG_MISSING_LOWERCASE: &str = "Add at least one lowercase letter";
pub const MSG_MISSING_DIGIT: &str = "Add at least one number";
pub const MSG_MISSING_SPECIAL: &str = "Add at least one special character";

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
