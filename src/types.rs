//! Result types produced by the password strength evaluator.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strength classification derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Classifies a clamped score. Thresholds are exclusive upper bounds.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..40 => StrengthLevel::Weak,
            40..60 => StrengthLevel::Medium,
            60..80 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    /// Display label shown next to the strength meter.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Faible",
            StrengthLevel::Medium => "Moyen",
            StrengthLevel::Strong => "Fort",
            StrengthLevel::VeryStrong => "Très fort",
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            StrengthLevel::Weak => StrengthColor::Warn,
            StrengthLevel::Medium => StrengthColor::Accent,
            StrengthLevel::Strong | StrengthLevel::VeryStrong => StrengthColor::Primary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme color of the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrengthColor {
    Warn,
    Accent,
    Primary,
}

impl StrengthColor {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthColor::Warn => "warn",
            StrengthColor::Accent => "accent",
            StrengthColor::Primary => "primary",
        }
    }
}

impl fmt::Display for StrengthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a password evaluation.
///
/// `score` is always within `0..=100` and `level`, `label` and `color`
/// are always consistent with it, except for the empty-password result
/// which carries its own "Très faible" label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PasswordStrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub label: String,
    pub color: StrengthColor,
    pub feedback: Vec<String>,
}

impl PasswordStrengthResult {
    /// Builds a result from a clamped score and the collected feedback.
    pub fn from_score(score: u8, feedback: Vec<String>) -> Self {
        let level = StrengthLevel::from_score(score);
        Self {
            score,
            level,
            label: level.label().to_string(),
            color: level.color(),
            feedback,
        }
    }

    /// Result returned when no password was entered.
    pub fn empty() -> Self {
        Self {
            score: 0,
            level: StrengthLevel::Weak,
            label: "Très faible".to_string(),
            color: StrengthColor::Warn,
            feedback: vec!["Please enter a password".to_string()],
        }
    }
}
