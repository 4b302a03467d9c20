//! Persistence module
//!
//! SQLite connectivity used by the database health probe.

mod database_health;

pub use database_health::SqlxDatabaseHealth;
