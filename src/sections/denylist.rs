//! Denylist section - penalizes common passwords.

use crate::denylist::Denylist;
use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

const COMMON_PASSWORD_PENALTY: i32 = 20;

/// Penalizes passwords built around a common password.
pub fn denylist_section(password: &SecretString, denylist: &Denylist) -> SectionScore {
    let mut score = SectionScore::default();
    if denylist.is_denied(password.expose_secret()) {
        score.penalize(COMMON_PASSWORD_PENALTY, "Avoid common passwords");
    }
    score
}
