//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

const MIN_LENGTH: usize = 8;

/// Cumulative length thresholds and the points each one adds.
const LENGTH_BONUSES: [(usize, i32); 4] = [(MIN_LENGTH, 15), (12, 10), (16, 10), (20, 5)];

/// Scores the password length, measured in characters.
///
/// Every threshold reached adds its bonus, so 20+ characters earn 40 points.
pub fn length_section(password: &SecretString) -> SectionScore {
    let len = password.expose_secret().chars().count();
    let mut score = SectionScore::default();

    for (threshold, bonus) in LENGTH_BONUSES {
        if len >= threshold {
            score.add(bonus);
        }
    }

    if len < MIN_LENGTH {
        score.advise(&format!("Use at least {} characters", MIN_LENGTH));
    }
    score
}
