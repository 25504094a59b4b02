//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading `ServerConfig`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// External posts service; `None` leaves `/api/posts` unavailable.
    pub posts_upstream_url: Option<String>,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `POSTS_UPSTREAM_URL`: URL answering `GET` with a JSON post array
    /// - `POSTS_UPSTREAM_TIMEOUT_SECS`: default 10, must be non-zero
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a numeric variable does not parse
    /// or the upstream timeout is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let raw_timeout = lookup("POSTS_UPSTREAM_TIMEOUT_SECS");
        let upstream_timeout_secs =
            parse_or("POSTS_UPSTREAM_TIMEOUT_SECS", raw_timeout.clone(), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        // A zero timeout makes reqwest fail every request.
        if upstream_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "POSTS_UPSTREAM_TIMEOUT_SECS",
                value: raw_timeout.unwrap_or_default(),
            });
        }
        let posts_upstream_url = lookup("POSTS_UPSTREAM_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());

        Ok(Self { port, posts_upstream_url, upstream_timeout_secs })
    }

    #[must_use]
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
