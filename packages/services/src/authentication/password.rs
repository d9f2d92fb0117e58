use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::fmt;

#[derive(Debug)]
pub enum PasswordError {
    /// Hashing failed, or a stored hash could not be parsed.
    Hash(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for PasswordError {
    fn from(e: argon2::password_hash::Error) -> Self {
        PasswordError::Hash(e)
    }
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::Hash(e) => write!(f, "password hashing failed: {}", e),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Hashes a plaintext password into an Argon2id PHC string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC string.
///
/// `Ok(false)` means the password does not match; errors are reserved for
/// hashes that cannot be read at all.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hashed)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
