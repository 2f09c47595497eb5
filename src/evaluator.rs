//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::denylist::Denylist;
use crate::sections::{
    Section, character_variety_section, denylist_section, length_section,
    pattern_analysis_section,
};
use crate::types::PasswordStrengthResult;

/// Sections in feedback order. The denylist section always runs last.
const SECTIONS: [Section; 3] = [
    length_section,
    character_variety_section,
    pattern_analysis_section,
];

/// Evaluates password strength against the built-in denylist.
///
/// An empty password short-circuits to a zero score asking for input.
/// Otherwise every section contributes points and feedback, and the
/// total is clamped to `0..=100` before classification. Never fails.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordStrengthResult {
    evaluate_password_strength_with(password, &Denylist::builtin())
}

/// Evaluates password strength against a caller-supplied denylist.
pub fn evaluate_password_strength_with(
    password: &SecretString,
    denylist: &Denylist,
) -> PasswordStrengthResult {
    if password.expose_secret().is_empty() {
        return PasswordStrengthResult::empty();
    }

    let mut score: i32 = 0;
    let mut feedback = Vec::new();

    let sections = SECTIONS
        .iter()
        .map(|section| section(password))
        .chain(std::iter::once(denylist_section(password, denylist)));

    for section in sections {
        score += section.points;
        feedback.extend(section.feedback);
    }

    let score = score.clamp(0, 100) as u8;
    PasswordStrengthResult::from_score(score, feedback)
}
