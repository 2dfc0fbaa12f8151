//! Argon2id password hashing for the optional hashed storage mode.
//!
//! Hashes use a cryptographically random salt generated via [`OsRng`] and are
//! stored in PHC string format, so algorithm parameters and salt travel with
//! the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use filmoteka_core::password::PasswordStorage;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// The value to write into `users.password` under the given storage mode.
pub fn password_for_storage(
    password: &str,
    mode: PasswordStorage,
) -> Result<String, argon2::password_hash::Error> {
    match mode {
        PasswordStorage::Plaintext => Ok(password.to_string()),
        PasswordStorage::Argon2 => hash_password(password),
    }
}
