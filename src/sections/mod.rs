//! Password scoring sections
//!
//! Each section contributes the predicates and feedback messages for one
//! aspect of the score. Orchestration and point weights live in the
//! evaluator.

mod length;
mod pattern;
mod variety;

pub use length::{earns_length_bonus, meets_min_length, MSG_TOO_SHORT};
pub use pattern::{
    has_repeated_run, has_sequential_run, MSG_REPEATED_RUN, MSG_SEQUENTIAL_RUN,
};
pub use variety::{
    has_digit, has_lowercase, has_special, has_uppercase, MSG_MISSING_DIGIT,
    MSG_MISSING_LOWERCASE, MSG_MISSING_SPECIAL, MSG_MISSING_UPPERCASE,
};
