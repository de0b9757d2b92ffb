//! Account password hashing (Argon2id, PHC string stored in
//! `usuarios.contrasena_hash`).

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Failures that are not a plain password mismatch.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),

    /// The stored value is not a PHC string, e.g. a row written by hand.
    #[error("stored password hash for account {usuario_id} is malformed")]
    MalformedHash { usuario_id: i64 },
}

/// Hash a new account password with a fresh salt.
pub fn hash_password(contrasena: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(contrasena.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Check a login attempt against the account's stored hash.
///
/// A mismatch is `Ok(false)`; only an unusable stored hash is an error.
pub fn verify_password(
    usuario_id: i64,
    contrasena: &str,
    stored_hash: &str,
) -> Result<bool, PasswordError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|_| PasswordError::MalformedHash { usuario_id })?;
    match Argon2::default().verify_password(contrasena.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Hash(e)),
    }
}
