//! Database connection settings for the Yulduz timetable database.
//!
//! `DbConfig` is built once at process start from environment variables
//! (with the deployment's defaults) and passed explicitly into the fetch
//! operation. There is no ambient global; whoever starts the process owns
//! the value.
//!
use std::env;

/// PostgreSQL port used by the deployment (not remapped)
pub const DB_PORT: u16 = 5432;

const DEFAULT_HOST: &str = "db";
const DEFAULT_NAME: &str = "Yulduz";
const DEFAULT_USER: &str = "student";
const DEFAULT_PASS: &str = "student_pass";

/// Connection settings for the timetable database
#[derive(Clone)]
pub struct DbConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
}

impl DbConfig {
    /// Read the connection settings from the environment, falling back to
    /// the deployment defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        DbConfig {
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: DB_PORT,
            dbname: get("DB_NAME").unwrap_or_else(|| DEFAULT_NAME.into()),
            user: get("DB_USER").unwrap_or_else(|| DEFAULT_USER.into()),
            password: get("DB_PASS").unwrap_or_else(|| DEFAULT_PASS.into()),
        }
    }
}
