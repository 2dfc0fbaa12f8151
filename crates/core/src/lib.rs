//! Shared primitives for the filmoteka service.
//!
//! Kept free of web and database dependencies so both the `db` and `api`
//! crates can depend on it.

pub mod error;
pub mod password;
pub mod types;
