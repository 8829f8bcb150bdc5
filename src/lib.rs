//! Rule-based password strength scoring
//!
//! This library scores candidate passwords with a fixed rule set and
//! returns a structured [`Verdict`]: validity, a clamped score in
//! `[0, 100]`, ordered feedback messages, and the five individual
//! requirement booleans. Evaluation is pure and total: any input string
//! yields a verdict, never an error.
//!
//! A separate common-password blacklist is available for consumers that
//! also want to reject well-known passwords; it does not participate in
//! scoring.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellable
//!   delivery, for keystroke-driven callers
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::evaluate_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Str0ng!Pass99".to_string().into());
//! let verdict = evaluate_password(&password);
//!
//! assert!(verdict.is_valid);
//! println!("Score: {}", verdict.score.value());
//! println!("Strength: {}", verdict.strength().label());
//! for message in &verdict.feedback {
//!     println!("- {message}");
//! }
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod sections;
mod types;

// Public API
pub use blacklist::{
    blacklist_path, get_blacklist, init_blacklist, init_blacklist_from_path, is_common_password,
    Blacklist, BlacklistError,
};
pub use evaluator::evaluate_password;
pub use types::{Requirements, Score, Strength, Verdict};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
