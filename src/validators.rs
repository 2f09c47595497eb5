//! Field validators used by the sign-up and login forms.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

const MIN_PASSWORD_LENGTH: usize = 8;
const MIN_ORGANIZATION_NAME: usize = 2;
const MAX_ORGANIZATION_NAME: usize = 100;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static FORM_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid"));
static FRENCH_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+33|0)[1-9]([0-9]{2}){4}$").expect("phone pattern is valid"));

/// Outcome of the password policy check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks the minimum account password policy: 8 characters with an
/// uppercase letter, a lowercase letter and a digit.
///
/// This gates submission; [`crate::evaluate_password_strength`] drives
/// the strength meter.
pub fn validate_password(password: &SecretString) -> PasswordValidation {
    let pwd = password.expose_secret();
    let mut errors = Vec::new();

    if pwd.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    if !pwd.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain an uppercase letter".to_string());
    }
    if !pwd.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain a lowercase letter".to_string());
    }
    if !pwd.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain a digit".to_string());
    }

    PasswordValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

pub fn validate_password_match(password: &SecretString, confirmation: &SecretString) -> bool {
    password.expose_secret() == confirmation.expose_secret()
}

/// Lenient slug check for the organization form field.
///
/// Accepts leading, trailing or doubled hyphens; use
/// [`crate::is_valid_slug`] for the strict format.
pub fn validate_slug(slug: &str) -> bool {
    slug.len() >= 2 && FORM_SLUG.is_match(slug)
}

pub fn validate_organization_name(name: &str) -> bool {
    (MIN_ORGANIZATION_NAME..=MAX_ORGANIZATION_NAME).contains(&name.chars().count())
}

/// Validates an optional French phone number such as `06 12 34 56 78`
/// or `+33612345678`. An empty value is accepted.
pub fn validate_french_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    FRENCH_PHONE.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("coach@club.fr"));
        assert!(validate_email("a.b+c@sub.domain.org"));
        assert!(!validate_email("coach@club"));
        assert!(!validate_email("coach club@club.fr"));
        assert!(!validate_email("@club.fr"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_password_ok() {
        let result = validate_password(&secret("Karate2024"));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_password_errors() {
        let result = validate_password(&secret("abc"));
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Password must be at least 8 characters".to_string(),
                "Password must contain an uppercase letter".to_string(),
                "Password must contain a digit".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_password_match() {
        assert!(validate_password_match(&secret("Same1234"), &secret("Same1234")));
        assert!(!validate_password_match(&secret("Same1234"), &secret("same1234")));
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("mon-club"));
        assert!(validate_slug("-mon--club-"));
        assert!(!validate_slug("m"));
        assert!(!validate_slug("Mon-Club"));
        assert!(!validate_slug("mon club"));
    }

    #[test]
    fn test_validate_organization_name() {
        assert!(validate_organization_name("AS"));
        assert!(validate_organization_name("Club de Karaté de Lyon"));
        assert!(!validate_organization_name("A"));
        assert!(validate_organization_name(&"é".repeat(100)));
        assert!(!validate_organization_name(&"a".repeat(101)));
    }

    #[test]
    fn test_validate_french_phone() {
        assert!(validate_french_phone(""));
        assert!(validate_french_phone("0612345678"));
        assert!(validate_french_phone("06 12 34 56 78"));
        assert!(validate_french_phone("+33612345678"));
        assert!(validate_french_phone("+33 6 12 34 56 78"));
        assert!(!validate_french_phone("0012345678"));
        assert!(!validate_french_phone("061234567"));
        assert!(!validate_french_phone("+3306123456789"));
        assert!(!validate_french_phone("   "));
    }

    #[test]
    fn test_validate_french_phone_rejects_non_ascii_digits() {
        // Arabic-Indic and full-width digits
        assert!(!validate_french_phone("06١٢٣٤٥٦٧٨"));
        assert!(!validate_french_phone("０６１２３４５６７８"));
        assert!(!validate_french_phone("+33６12345678"));
    }
}
