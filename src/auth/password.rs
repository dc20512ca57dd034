//! Password strength policy and one-way hashing.
//!
//! The policy runs before any hashing: a plaintext that fails it never
//! reaches the hasher. Hashes are salted argon2id PHC strings.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::errors::ApiError;

/// Symbol set accepted by the strength policy.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+[]{}|;':\",.<>?/\\`~";

/// Minimum plaintext length.
const MIN_PASSWORD_LEN: usize = 8;

/// Check the strength policy: at least 8 characters, with at least one
/// uppercase letter, one lowercase letter, one digit, and one symbol.
pub fn check_strength(plaintext: &str) -> Result<(), ApiError> {
    let long_enough = plaintext.chars().count() >= MIN_PASSWORD_LEN;
    let has_upper = plaintext.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = plaintext.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = plaintext.chars().any(|c| c.is_ascii_digit());
    let has_symbol = plaintext.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if long_enough && has_upper && has_lower && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ApiError::WeakCredential(
            "Password must be at least 8 characters, include uppercase, lowercase, number, and symbol"
                .to_string(),
        ))
    }
}

/// Hash a plaintext that already passed the strength policy.
///
/// Each call generates a fresh random salt, so two hashes of the same
/// plaintext differ. Output is a self-describing PHC string.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| ApiError::InvalidArgument(format!("Hashing failed: {}", e)))?
        .to_string();
    Ok(password_hash)
}

/// Verify a plaintext against a stored PHC string.
///
/// Returns `false` on any mismatch or malformed stored hash; a wrong
/// password is never an error.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_password() {
        assert!(check_strength("Ab1!").is_err());
    }

    #[test]
    fn rejects_missing_uppercase_and_symbol() {
        // Scenario: "abc12345" is long enough but has no uppercase or symbol.
        let err = check_strength("abc12345").unwrap_err();
        assert!(matches!(err, ApiError::WeakCredential(_)));
    }

    #[test]
    fn rejects_missing_digit() {
        assert!(check_strength("Abcdefg!").is_err());
    }

    #[test]
    fn accepts_strong_password() {
        assert!(check_strength("Abcdef1!").is_ok());
        assert!(check_strength("P@ssw0rd").is_ok());
    }

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("Abcdef1!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("Abcdef1!", &hash));
        assert!(!verify_password("Abcdef1?", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let h1 = hash_password("Abcdef1!").unwrap();
        let h2 = hash_password("Abcdef1!").unwrap();
        assert_ne!(h1, h2, "per-credential salt must differ");
    }

    #[test]
    fn verify_tolerates_garbage_hash() {
        assert!(!verify_password("Abcdef1!", "not-a-phc-string"));
    }
}
