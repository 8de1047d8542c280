//! Configuration loader and defaults for the yulduzweb server.
//!
//! Builds a `Config` from environment variables (with sensible defaults):
//! the listening port (`web_port`) and the timetable database settings
//! (`db`). The value is constructed once in `main` and handed to the
//! server explicitly — there is no ambient global.
//!
use std::env;

use yulduzdb::config::DbConfig;

const DEFAULT_WEB_PORT: u16 = 8000;

/// Application configuration for the web process
pub struct Config {
    /// Web http port
    pub web_port: u16,
    /// Timetable database settings
    pub db: DbConfig,
}

impl Config {
    /// Read the configuration from the environment, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Config {
            web_port: env::var("WEB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_WEB_PORT),
            db: DbConfig::from_env(),
        }
    }
}
