//! Pattern analysis section - penalizes repeated characters and common sequences.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

const PATTERN_PENALTY: i32 = 10;

static COMMON_SEQUENCES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)123|234|345|456|567|678|789|abc|bcd|cde|def|efg|fgh|ghi|qwerty|azerty")
        .expect("common sequence pattern is valid")
});

/// Returns `true` if some character appears 3 or more times in a row.
fn has_repeated_run(pwd: &str) -> bool {
    let mut run = 0;
    let mut prev = None;
    for c in pwd.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

/// Penalizes repeated character runs ("aaa", "111") and well-known
/// sequences ("123", "abc", "qwerty"). Each finding costs 10 points.
pub fn pattern_analysis_section(password: &SecretString) -> SectionScore {
    let pwd = password.expose_secret();
    let mut score = SectionScore::default();

    if has_repeated_run(pwd) {
        score.penalize(PATTERN_PENALTY, "Avoid repeated characters");
    }

    if COMMON_SEQUENCES.is_match(pwd) {
        score.penalize(PATTERN_PENALTY, "Avoid common sequences");
    }

    score
}
