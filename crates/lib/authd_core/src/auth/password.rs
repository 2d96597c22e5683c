//! Password hashing via Argon2id.
//!
//! Hashes use the `argon2` crate with its default (memory-hard) parameters
//! and a fresh random salt per call, encoded as a PHC-format string
//! (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`).

use argon2::Argon2;
use argon2::password_hash::{
    Error as PhcError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};

use super::AuthError;

/// Hash a password with Argon2id. Returns a PHC-format string.
///
/// Each call generates a fresh random salt, so hashing the same password
/// twice yields two different strings.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("argon2 hash: {e}")))
}

/// Verify a password against a PHC-format Argon2 hash.
///
/// Returns `Ok(false)` on a plain mismatch. A hash string that cannot be
/// parsed or verified as a PHC-encoded Argon2 hash is reported as
/// [`AuthError::MalformedHash`], never as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::MalformedHash(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PhcError::Password) => Ok(false),
        Err(e) => Err(AuthError::MalformedHash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("secret1").expect("hash");
        assert!(verify_password("secret1", &hash).expect("verify"));
    }

    #[test]
    fn wrong_password_is_a_mismatch_not_an_error() {
        let hash = hash_password("secret1").expect("hash");
        assert!(!verify_password("wrong", &hash).expect("verify"));
    }

    #[test]
    fn hashes_are_salted_uniquely() {
        let a = hash_password("secret1").expect("hash");
        let b = hash_password("secret1").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_phc_argon2id() {
        let hash = hash_password("secret1").expect("hash");
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "secret1");
    }

    #[test]
    fn garbage_hash_is_malformed() {
        let err = verify_password("secret1", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::MalformedHash(_)));
    }

    #[test]
    fn empty_hash_is_malformed() {
        let err = verify_password("secret1", "").unwrap_err();
        assert!(matches!(err, AuthError::MalformedHash(_)));
    }
}
