//! Startup configuration, loaded once from the environment.

use std::env;

/// Port used when `PORT` is unset, empty, or unparsable.
pub const DEFAULT_PORT: u16 = 4000;

const ENV_FILE: &str = "./.env";

/// Immutable environment-derived settings, passed explicitly to the
/// bootstrap instead of being read ad hoc from process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    port: u16,
}

impl Config {
    /// Load configuration at startup.
    ///
    /// Reads `./.env` when present (a missing file is not an error), then
    /// `PORT`.
    pub fn load() -> Self {
        let _ = dotenv::from_path(ENV_FILE);

        Self {
            port: port_from(env::var("PORT").ok()),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn port_from(raw: Option<String>) -> u16 {
    raw.as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
