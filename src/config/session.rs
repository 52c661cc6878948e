//! Session cookie and storage configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// Secret used when none is configured. Rejected in production.
pub const DEFAULT_SESSION_SECRET: &str = "this is not very secure";

/// Minimum secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Where session records are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    #[default]
    Memory,
    Redis,
}

/// Session configuration
#[derive(Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Key for signing session cookies
    #[serde(default = "default_secret")]
    secret: String,

    /// Cookie and record lifetime in days
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u64,

    /// Add the `Secure` attribute to the cookie
    #[serde(default)]
    pub secure_cookie: bool,

    /// Session storage backend
    #[serde(default)]
    pub store: SessionStoreKind,

    /// Start new sessions with the demo lists
    #[serde(default)]
    pub seed_demo_data: bool,

    /// Interval between sweeps of expired in-memory sessions
    #[serde(default = "default_purge_interval")]
    pub purge_interval_secs: u64,
}

impl SessionConfig {
    pub fn secret(&self) -> SecretString {
        SecretString::new(self.secret.clone())
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_days.saturating_mul(24 * 60 * 60))
    }

    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs.max(1))
    }

    /// Validate session configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        let name_is_token = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !name_is_token {
            return Err(ValidationError::InvalidCookieName);
        }
        if self.max_age_days == 0 || self.max_age_days > 365 {
            return Err(ValidationError::InvalidSessionMaxAge);
        }
        if production {
            if self.secret == DEFAULT_SESSION_SECRET {
                return Err(ValidationError::DefaultSessionSecret);
            }
            if self.secret.len() < MIN_PRODUCTION_SECRET_LEN {
                return Err(ValidationError::SessionSecretTooShort(
                    MIN_PRODUCTION_SECRET_LEN,
                ));
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_secret(mut self, secret: &str) -> Self {
        self.secret = secret.to_string();
        self
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("cookie_name", &self.cookie_name)
            .field("secret", &"[REDACTED]")
            .field("max_age_days", &self.max_age_days)
            .field("secure_cookie", &self.secure_cookie)
            .field("store", &self.store)
            .field("seed_demo_data", &self.seed_demo_data)
            .field("purge_interval_secs", &self.purge_interval_secs)
            .finish()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secret: default_secret(),
            max_age_days: default_max_age_days(),
            secure_cookie: false,
            store: SessionStoreKind::default(),
            seed_demo_data: false,
            purge_interval_secs: default_purge_interval(),
        }
    }
}

fn default_cookie_name() -> String {
    "todos-session-id".to_string()
}

fn default_secret() -> String {
    DEFAULT_SESSION_SECRET.to_string()
}

fn default_max_age_days() -> u64 {
    31
}

fn default_purge_interval() -> u64 {
    300
}
