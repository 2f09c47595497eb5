//! Form validation toolkit for ClassHub
//!
//! This library provides the framework-free logic behind the ClassHub
//! sign-up and login forms: password strength scoring, slug generation
//! for organizations and plain field validators.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize`/`Deserialize` for strength results
//!
//! # Environment Variables
//!
//! - `CLASSHUB_DENYLIST_PATH`: File read by [`Denylist::load`] to extend
//!   the common password denylist (default: `./assets/denylist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use classhub_forms::{
//!     Denylist, evaluate_password_strength, evaluate_password_strength_with,
//!     generate_unique_slug,
//! };
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!2024".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {} ({})", evaluation.score, evaluation.label);
//!
//! // Optional: score against an extended denylist (load once at startup)
//! let denylist = Denylist::load().unwrap_or_default();
//! let evaluation = evaluate_password_strength_with(&password, &denylist);
//! println!("Score: {} ({})", evaluation.score, evaluation.label);
//!
//! let slug = generate_unique_slug("Mon Club", &["mon-club"]);
//! assert_eq!(slug, "mon-club-2");
//! ```

// Internal modules
mod crack_time;
mod denylist;
mod evaluator;
mod generator;
mod sections;
mod slug;
mod types;
mod validators;

// Public API
pub use crack_time::estimate_crack_time;
pub use denylist::{
    BUILTIN_DENYLIST, DENYLIST_PATH_ENV, Denylist, DenylistError, get_denylist_path,
};
pub use evaluator::{evaluate_password_strength, evaluate_password_strength_with};
pub use generator::{
    DEFAULT_PASSWORD_LENGTH, generate_strong_password, generate_strong_password_with,
};
pub use sections::SPECIAL_CHARS;
pub use slug::{
    DEFAULT_SUGGESTION_COUNT, FALLBACK_SLUG, MAX_SLUG_LENGTH, MIN_SLUG_LENGTH, generate_slug,
    generate_unique_slug, is_valid_slug, suggest_slugs,
};
pub use types::{PasswordStrengthResult, StrengthColor, StrengthLevel};
pub use validators::{
    PasswordValidation, validate_email, validate_french_phone, validate_organization_name,
    validate_password, validate_password_match, validate_slug,
};
