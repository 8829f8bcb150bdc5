//! Verdict types returned by the evaluator.

/// The five independent requirement checks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirements {
    /// Character count >= 8.
    pub length: bool,
    /// Contains at least one `A`-`Z`.
    pub uppercase: bool,
    /// Contains at least one `a`-`z`.
    pub lowercase: bool,
    /// Contains at least one `0`-`9`.
    pub numbers: bool,
    /// Contains at least one character from the special-character set.
    pub special: bool,
}

impl Requirements {
    /// Returns `true` when every requirement is met.
    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.numbers && self.special
    }
}

/// A password score, always in `[0, 100]`.
///
/// Intermediate scoring arithmetic may overshoot in either direction;
/// construction clamps, so a `Score` is in range by definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    /// Clamps a raw point total into `[0, 100]`.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Display tier derived from the score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Tier boundaries: `< 30` weak, `< 60` medium, `< 80` strong,
    /// otherwise very strong.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=29 => Strength::Weak,
            30..=59 => Strength::Medium,
            60..=79 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    /// Human-readable label for display next to a strength meter.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very strong",
        }
    }

    /// CSS-style class name for coloring a strength meter.
    pub fn color_class(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very-strong",
        }
    }
}

/// Full result of evaluating one candidate password.
///
/// Feedback is ordered: one message per unmet requirement (in
/// [`Requirements`] field order), then up to two pattern advisories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// All five requirements met and score at least 60.
    pub is_valid: bool,
    pub score: Score,
    pub feedback: Vec<String>,
    pub requirements: Requirements,
}

impl Verdict {
    /// Display tier for this verdict's score.
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }
}
