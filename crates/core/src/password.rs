//! How user passwords are written to the `users.password` column.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Storage mode for user passwords.
///
/// `Plaintext` keeps the historical wire/storage contract: the submitted
/// password is written verbatim. `Argon2` stores a PHC-formatted Argon2id
/// hash instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordStorage {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordStorage {
    pub fn as_str(self) -> &'static str {
        match self {
            PasswordStorage::Plaintext => "plaintext",
            PasswordStorage::Argon2 => "argon2",
        }
    }
}

impl fmt::Display for PasswordStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordStorage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" | "plain" => Ok(PasswordStorage::Plaintext),
            "argon2" | "argon2id" => Ok(PasswordStorage::Argon2),
            other => Err(CoreError::Validation(format!(
                "Unknown password storage mode '{other}' (expected 'plaintext' or 'argon2')"
            ))),
        }
    }
}
