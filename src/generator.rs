//! Strong password generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

/// Length used by the "suggest a password" button.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Every class the generator guarantees, in generation order.
const CLASSES: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL];

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Generates a password using the operating system RNG.
pub fn generate_strong_password(length: usize) -> SecretString {
    generate_strong_password_with(&mut OsRng, length)
}

/// Generates a password with the supplied cryptographically secure RNG.
///
/// The result contains at least one lowercase letter, uppercase letter,
/// digit and special character. Lengths below 4 still produce those
/// four characters.
pub fn generate_strong_password_with<R>(rng: &mut R, length: usize) -> SecretString
where
    R: Rng + CryptoRng + ?Sized,
{
    let all: Vec<u8> = CLASSES.concat();
    let mut bytes: Vec<u8> = Vec::with_capacity(length.max(CLASSES.len()));

    for class in CLASSES {
        bytes.push(pick(rng, class));
    }
    while bytes.len() < length {
        bytes.push(pick(rng, &all));
    }
    bytes.shuffle(rng);

    // Every alphabet is ASCII.
    let password: String = bytes.into_iter().map(char::from).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", password.len());

    SecretString::new(password.into())
}
