use std::time::Duration;

use filmoteka_core::error::CoreError;
use filmoteka_core::password::PasswordStorage;

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Postgres connection string. Required.
    pub database_url: String,
    /// Upper bound on pooled connections (default: `20`).
    pub db_max_connections: u32,
    /// Seconds a query may wait for a pooled connection (default: `5`).
    /// Must be below `request_timeout_secs` so an unreachable database
    /// surfaces as a storage error rather than a request timeout.
    pub db_acquire_timeout_secs: u64,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Apply bundled migrations at startup (default: `true`).
    pub run_migrations: bool,
    /// How `POST /users` writes the password column (default: plaintext).
    pub password_storage: PasswordStorage,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `HOST`                    | `0.0.0.0`   |
    /// | `PORT`                    | `8080`      |
    /// | `DATABASE_URL`            | (required)  |
    /// | `DB_MAX_CONNECTIONS`      | `20`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`         |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`        |
    /// | `RUN_MIGRATIONS`          | `true`      |
    /// | `PASSWORD_STORAGE`        | `plaintext` |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Pool acquire timeout as a [`Duration`].
    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port: u16 = parse_var("PORT", &var("PORT", "8080"))?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| CoreError::Validation("DATABASE_URL must be set".into()))?;

        let db_max_connections: u32 =
            parse_var("DB_MAX_CONNECTIONS", &var("DB_MAX_CONNECTIONS", "20"))?;

        let db_acquire_timeout_secs: u64 =
            parse_var("DB_ACQUIRE_TIMEOUT_SECS", &var("DB_ACQUIRE_TIMEOUT_SECS", "5"))?;
        let request_timeout_secs: u64 =
            parse_var("REQUEST_TIMEOUT_SECS", &var("REQUEST_TIMEOUT_SECS", "30"))?;
        if db_acquire_timeout_secs >= request_timeout_secs {
            return Err(CoreError::Validation(format!(
                "DB_ACQUIRE_TIMEOUT_SECS ({db_acquire_timeout_secs}) must be below \
                 REQUEST_TIMEOUT_SECS ({request_timeout_secs})"
            )));
        }
        let run_migrations: bool = parse_var("RUN_MIGRATIONS", &var("RUN_MIGRATIONS", "true"))?;
        let password_storage = var("PASSWORD_STORAGE", "plaintext").parse::<PasswordStorage>()?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            db_acquire_timeout_secs,
            request_timeout_secs,
            run_migrations,
            password_storage,
        })
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, CoreError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| CoreError::Validation(format!("{key} has invalid value '{raw}': {e}")))
}
