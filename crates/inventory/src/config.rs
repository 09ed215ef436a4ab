use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "inventory.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub database_path: String,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Write the seed items into a store that has never held a record (default: true)
    pub seed_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_PATH` - SQLite database path (default: "inventory.db")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `SEED_DATA` - Seed a fresh store on startup (default: true)
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "inventory.db".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            seed_data: env::var("SEED_DATA")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
