//! Password strength evaluator - fixed-rule scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    earns_length_bonus, has_digit, has_lowercase, has_repeated_run, has_sequential_run,
    has_special, has_uppercase, meets_min_length, MSG_MISSING_DIGIT, MSG_MISSING_LOWERCASE,
    MSG_MISSING_SPECIAL, MSG_MISSING_UPPERCASE, MSG_REPEATED_RUN, MSG_SEQUENTIAL_RUN,
    MSG_TOO_SHORT,
};
use crate::types::{Requirements, Score, Verdict};

// Point weights, fixed for scoring compatibility with existing consumers.
const LENGTH_POINTS: i64 = 20;
const UPPERCASE_POINTS: i64 = 15;
const LOWERCASE_POINTS: i64 = 15;
const NUMBERS_POINTS: i64 = 20;
const SPECIAL_POINTS: i64 = 20;
const LONG_PASSWORD_BONUS: i64 = 10;
const REPEATED_RUN_PENALTY: i64 = 10;
const SEQUENTIAL_RUN_PENALTY: i64 = 15;

/// Minimum score for a verdict to be valid, on top of all requirements
/// being met.
const MIN_VALID_SCORE: u8 = 60;

/// Evaluates password strength and returns a detailed verdict.
///
/// Pure and total: any string input, including empty, produces a verdict;
/// there is no error path. Calling twice with the same input yields an
/// identical verdict.
///
/// Feedback ordering is part of the contract: one message per unmet
/// requirement in the order length, uppercase, lowercase, numbers,
/// special, then the repeated-run advisory, then the sequential-run
/// advisory.
pub fn evaluate_password(password: &SecretString) -> Verdict {
    let pwd = password.expose_secret();

    let requirements = Requirements {
        length: meets_min_length(pwd),
        uppercase: has_uppercase(pwd),
        lowercase: has_lowercase(pwd),
        numbers: has_digit(pwd),
        special: has_special(pwd),
    };

    let mut raw: i64 = 0;
    let mut feedback = Vec::new();

    let checks: [(bool, i64, &str); 5] = [
        (requirements.length, LENGTH_POINTS, MSG_TOO_SHORT),
        (requirements.uppercase, UPPERCASE_POINTS, MSG_MISSING_UPPERCASE),
        (requirements.lowercase, LOWERCASE_POINTS, MSG_MISSING_LOWERCASE),
        (requirements.numbers, NUMBERS_POINTS, MSG_MISSING_DIGIT),
        (requirements.special, SPECIAL_POINTS, MSG_MISSING_SPECIAL),
    ];

    for (met, points, message) in checks {
        if met {
            raw += points;
        } else {
            feedback.push(message.to_string());
        }
    }

    // Cumulative with the length requirement's points; raw totals above
    // 100 are possible here and clamped below.
    if earns_length_bonus(pwd) {
        raw += LONG_PASSWORD_BONUS;
    }

    // Each pattern penalty fires at most once, however many matches exist.
    if has_repeated_run(pwd) {
        raw -= REPEATED_RUN_PENALTY;
        feedback.push(MSG_REPEATED_RUN.to_string());
    }

    if has_sequential_run(pwd) {
        raw -= SEQUENTIAL_RUN_PENALTY;
        feedback.push(MSG_SEQUENTIAL_RUN.to_string());
    }

    let score = Score::clamped(raw);
    let is_valid = requirements.all_met() && score.value() >= MIN_VALID_SCORE;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = score.value(),
        is_valid,
        feedback_count = feedback.len(),
        "password evaluated"
    );

    Verdict {
        is_valid,
        score,
        feedback,
        requirements,
    }
}

/// Debounce before an async evaluation's verdict is delivered.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async variant that debounces, evaluates, and sends the verdict via
/// channel.
///
/// Intended for keystroke-driven callers: cancel the token when a newer
/// candidate supersedes this one and the stale verdict is never sent.
/// Cancellation only suppresses delivery; it never produces a partial
/// verdict.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let verdict = evaluate_password(password);

    if let Err(e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
