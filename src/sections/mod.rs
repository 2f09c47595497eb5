//! Password scoring sections
//!
//! Each section scores one aspect of a password and reports what the
//! user could improve. Points may be negative for penalty sections.

mod denylist;
mod length;
mod pattern;
mod variety;

pub use denylist::denylist_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::{SPECIAL_CHARS, character_variety_section};
pub(crate) use variety::is_special;

use secrecy::SecretString;

/// Points and feedback contributed by a single section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionScore {
    pub points: i32,
    pub feedback: Vec<String>,
}

impl SectionScore {
    pub(crate) fn add(&mut self, points: i32) {
        self.points += points;
    }

    pub(crate) fn penalize(&mut self, points: i32, reason: &str) {
        self.points -= points;
        self.feedback.push(reason.to_string());
    }

    pub(crate) fn advise(&mut self, reason: &str) {
        self.feedback.push(reason.to_string());
    }
}

/// Signature of the sections that only look at the password.
pub type Section = fn(&SecretString) -> SectionScore;
