//! Password hashing
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$...`) so the parameters and
//! salt travel with the hash.

use argon2::{
    Argon2,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString, rand_core::OsRng,
    },
};

use crate::auth::PasswordError;

/// Hash a password with a freshly generated salt.
///
/// # Errors
///
/// Returns an error if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Check a password against a stored PHC hash string.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(PasswordError::MalformedHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(error) => Err(PasswordError::MalformedHash(error)),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hash_is_argon2id_phc_string() -> TestResult {
        let hash = hash_password("hunter2")?;

        assert!(hash.starts_with("$argon2id$"), "unexpected hash format: {hash}");

        Ok(())
    }

    #[test]
    fn same_password_hashes_differently() -> TestResult {
        assert_ne!(hash_password("hunter2")?, hash_password("hunter2")?);

        Ok(())
    }

    #[test]
    fn verify_accepts_correct_password() -> TestResult {
        let hash = hash_password("hunter2")?;

        assert!(verify_password("hunter2", &hash)?);

        Ok(())
    }

    #[test]
    fn verify_rejects_wrong_password() -> TestResult {
        let hash = hash_password("hunter2")?;

        assert!(!verify_password("hunter3", &hash)?);

        Ok(())
    }

    #[test]
    fn verify_malformed_hash_returns_error() {
        let result = verify_password("hunter2", "plaintext");

        assert!(
            matches!(result, Err(PasswordError::MalformedHash(_))),
            "expected MalformedHash, got {result:?}"
        );
    }
}
