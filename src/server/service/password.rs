//! Password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// One-way password hashing with Argon2id.
///
/// Digests are PHC strings carrying the salt and parameters, so verification
/// needs no extra state. Equal plaintexts never produce equal digests because
/// every hash draws a fresh random salt.
pub struct PasswordService;

impl PasswordService {
    /// Hashes a plaintext password into a PHC-format digest.
    ///
    /// # Arguments
    /// - `plain` - The plaintext password
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-format Argon2id digest
    /// - `Err(AppError::InternalError)` - Hashing failed
    pub fn hash(plain: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let digest = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|err| AppError::InternalError(format!("Failed to hash password: {}", err)))?;

        Ok(digest.to_string())
    }

    /// Verifies a plaintext password against a stored digest.
    ///
    /// A wrong password is a normal outcome and returns `Ok(false)`; a digest
    /// that cannot be parsed indicates corrupted stored data and is an error.
    ///
    /// # Arguments
    /// - `plain` - The plaintext password to check
    /// - `digest` - The stored PHC-format digest
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches the digest
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError::InternalError)` - The stored digest is malformed
    pub fn verify(plain: &str, digest: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(digest).map_err(|err| {
            AppError::InternalError(format!("Stored password digest is malformed: {}", err))
        })?;

        match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AppError::InternalError(format!(
                "Password verification failed: {}",
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_correct_password() {
        let digest = PasswordService::hash("hunter2!").unwrap();

        assert!(PasswordService::verify("hunter2!", &digest).unwrap());
    }

    #[test]
    fn rejects_wrong_password() {
        let digest = PasswordService::hash("hunter2!").unwrap();

        assert!(!PasswordService::verify("hunter3!", &digest).unwrap());
    }

    #[test]
    fn salts_produce_distinct_digests() {
        let first = PasswordService::hash("same-password").unwrap();
        let second = PasswordService::hash("same-password").unwrap();

        assert_ne!(first, second);
        assert!(PasswordService::verify("same-password", &first).unwrap());
        assert!(PasswordService::verify("same-password", &second).unwrap());
    }

    #[test]
    fn malformed_digest_is_an_error() {
        let result = PasswordService::verify("whatever", "not-a-phc-string");

        assert!(result.is_err());
    }
}
