//! Pattern section - repeated-character and sequential-run detection.

/// Sequential fragments that trigger the sequence penalty. Alphabetic
/// entries match case-insensitively.
const SEQUENCES: [&str; 12] = [
    "123", "234", "345", "456", "567", "678", "789", "890", "abc", "bcd", "cde", "def",
];

pub const MSG_REPEATED_RUN: &str = "Avoid repeating the same character three or more times";
pub const MSG_SEQUENTIAL_RUN: &str = "Avoid sequential characters like \"123\" or \"abc\"";

/// Detects a run of three or more identical consecutive characters.
pub fn has_repeated_run(password: &str) -> bool {
    let mut run = 1;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
        prev = Some(c);
    }
    false
}

/// Detects any of the known sequential fragments as a substring.
pub fn has_sequential_run(password: &str) -> bool {
    let lowered = password.to_lowercase();
    SEQUENCES.iter().any(|seq| lowered.contains(seq))
}
