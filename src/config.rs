//! Process configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `AppConfig` is built once in `main` and handed to `AppState`. Nothing else
//! reads the environment, so tests construct configs directly.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_IDENTITY_LOGIN_URL: &str = "https://appeears.earthdatacloud.nasa.gov/api/login";
pub const DEFAULT_GBIF_BASE_URL: &str = "https://api.gbif.org/v1";
pub const DEFAULT_INATURALIST_BASE_URL: &str = "https://api.inaturalist.org/v1";
pub const DEFAULT_OCCURRENCE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Identity-service login pair. The password never shows up in `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub login_url: String,
    /// `None` when either variable is unset; login then fails per request.
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceConfig {
    pub gbif_base_url: String,
    pub inaturalist_base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub identity: IdentityConfig,
    pub occurrences: OccurrenceConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 5000
    /// - `EARTHDATA_USERNAME` / `EARTHDATA_PASSWORD`: identity credentials
    /// - `IDENTITY_LOGIN_URL`: identity login endpoint
    /// - `GBIF_BASE_URL`, `INATURALIST_BASE_URL`: occurrence API roots
    /// - `OCCURRENCE_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let credentials = match (lookup("EARTHDATA_USERNAME"), lookup("EARTHDATA_PASSWORD")) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };
        let identity = IdentityConfig {
            login_url: lookup("IDENTITY_LOGIN_URL").unwrap_or_else(|| DEFAULT_IDENTITY_LOGIN_URL.to_string()),
            credentials,
        };

        let timeout_secs =
            parse_or("OCCURRENCE_TIMEOUT_SECS", lookup("OCCURRENCE_TIMEOUT_SECS"), DEFAULT_OCCURRENCE_TIMEOUT_SECS)?;
        let occurrences = OccurrenceConfig {
            gbif_base_url: base_url(lookup("GBIF_BASE_URL"), DEFAULT_GBIF_BASE_URL),
            inaturalist_base_url: base_url(lookup("INATURALIST_BASE_URL"), DEFAULT_INATURALIST_BASE_URL),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self { port, identity, occurrences })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn base_url(raw: Option<String>, default: &str) -> String {
    raw.as_deref()
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
