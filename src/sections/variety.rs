//! Character variety section - checks for uppercase, lowercase, digits, special chars
//! and rewards passwords made of many distinct characters.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

/// Characters counted as "special" by the scorer and the crack-time estimate.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>_-+=[]\\/'`~;";

const CLASS_BONUS: i32 = 15;
const DIVERSITY_BONUS: i32 = 5;

pub(crate) fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Scores character classes and character diversity.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    let pwd = password.expose_secret();
    let mut score = SectionScore::default();

    let classes: [(fn(&char) -> bool, &str); 4] = [
        (char::is_ascii_uppercase, "Add an uppercase letter"),
        (char::is_ascii_lowercase, "Add a lowercase letter"),
        (char::is_ascii_digit, "Add a digit"),
        (|c: &char| is_special(*c), "Add a special character (!@#$%...)"),
    ];

    for (matches, advice) in classes {
        if pwd.chars().any(|c| matches(&c)) {
            score.add(CLASS_BONUS);
        } else {
            score.advise(advice);
        }
    }

    // Integer form of unique >= 60% and unique >= 80% of the length.
    let len = pwd.chars().count();
    let unique = pwd.chars().collect::<HashSet<char>>().len();
    if unique * 5 >= len * 3 {
        score.add(DIVERSITY_BONUS);
    }
    if unique * 5 >= len * 4 {
        score.add(DIVERSITY_BONUS);
    }

    score
}
