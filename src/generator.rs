//! Password generator - rejection-sampled random passwords.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::criteria::{has_digit, has_lowercase, has_special, has_uppercase};

/// Shortest password that can contain all four required character classes.
pub const MIN_GENERATED_LENGTH: usize = 4;

/// Alphabet the generator draws from: ASCII letters, digits, and the eight
/// special characters the diversity check recognizes. 70 symbols.
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("requested length {0} cannot satisfy all character classes (minimum {min})", min = MIN_GENERATED_LENGTH)]
    InvalidLength(usize),
}

/// Generates a random password of exactly `length` characters.
///
/// Draws uniformly from the 70-symbol alphabet and accepts the first draw
/// containing at least one uppercase letter, one lowercase letter, one
/// digit, and one special character, so every generated password satisfies
/// the evaluator's diversity criteria. The expected number of draws is
/// small for any accepted length.
///
/// # Errors
/// Returns `GenerateError::InvalidLength` if `length` is below
/// `MIN_GENERATED_LENGTH`: four disjoint character classes cannot fit in
/// fewer than four characters, and the sampling loop would never
/// terminate.
pub fn generate_password(length: usize) -> Result<SecretString, GenerateError> {
    if length < MIN_GENERATED_LENGTH {
        return Err(GenerateError::InvalidLength(length));
    }

    let mut rng = rand::thread_rng();

    loop {
        let candidate: String = (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();

        if has_uppercase(&candidate)
            && has_lowercase(&candidate)
            && has_digit(&candidate)
            && has_special(&candidate)
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("Generated password of {} characters", length);

            return Ok(SecretString::new(candidate.into()));
        }
    }
}
