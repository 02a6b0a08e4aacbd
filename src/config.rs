use std::{collections::HashMap, time::Duration};

use config::{Config as ConfigLib, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::models::DEFAULT_LOCALE;

pub const DEFAULT_API_URL: &str = "https://api.veriface.eu";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// What the gateway does when the API answers with a non-200 status.
///
/// Transport and mapping failures are always returned to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Return the classified `ApiError`.
    #[default]
    Propagate,
    /// Print a diagnostic and terminate the process.
    #[serde(alias = "die")]
    Exit,
}

#[derive(Debug, Deserialize)]
pub struct VerifaceConfig {
    pub api_key: SecretString,
    pub api_url: String,
    pub error_policy: ErrorPolicy,
    pub default_locale: String,
    pub request_timeout_ms: u64,
}

impl VerifaceConfig {
    /// Configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_url: DEFAULT_API_URL.to_string(),
            error_policy: ErrorPolicy::default(),
            default_locale: DEFAULT_LOCALE.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    /// An empty URL keeps the default one.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        if !api_url.is_empty() {
            self.api_url = api_url;
        }
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Stored with millisecond precision; longer durations saturate.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Loads the configuration from `config/veriface.*`, `.env` and the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {e}");
        }
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("error_policy", "propagate")?
            .set_default("default_locale", DEFAULT_LOCALE)?
            .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS)?
            .add_source(File::with_name("config/veriface").required(false));

        // Explicit overrides replace the system environment so tests do not
        // pick up variables from the host
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = builder.set_override(&key, value)?;
            }
        } else {
            // e.g. VERIFACE_API_KEY, VERIFACE_ERROR_POLICY
            builder = builder.add_source(
                Environment::with_prefix("VERIFACE")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder.build()?.try_deserialize()
    }
}
