//! Brute-force crack time estimate shown under the strength meter.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::is_special;

/// Guesses per second assumed for an offline GPU attack.
const ATTEMPTS_PER_SECOND: f64 = 10_000_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;

/// Size of the alphabet an attacker would have to search.
///
/// Falls back to 1 when the password uses none of the known classes.
fn charset_size(pwd: &str) -> u32 {
    let mut size = 0;
    if pwd.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if pwd.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if pwd.chars().any(is_special) {
        size += 32;
    }
    size.max(1)
}

/// Estimates how long an exhaustive search would take on average,
/// as a human readable string such as `"3 hours"`.
pub fn estimate_crack_time(password: &SecretString) -> String {
    let pwd = password.expose_secret();
    let length = pwd.chars().count() as f64;
    let combinations = f64::from(charset_size(pwd)).powf(length);
    // Half the keyspace on average.
    let seconds = combinations / ATTEMPTS_PER_SECOND / 2.0;

    let (value, unit) = if seconds < 1.0 {
        return "instant".to_string();
    } else if seconds < MINUTE {
        (seconds, "seconds")
    } else if seconds < HOUR {
        (seconds / MINUTE, "minutes")
    } else if seconds < DAY {
        (seconds / HOUR, "hours")
    } else if seconds < YEAR {
        (seconds / DAY, "days")
    } else if seconds < CENTURY {
        (seconds / YEAR, "years")
    } else {
        return "several centuries".to_string();
    };

    format!("{} {}", value.round(), unit)
}
