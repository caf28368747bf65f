//! Environment-sourced backend configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the backend service URL.
pub const URL_VAR: &str = "VELU_BACKEND_URL";

/// Environment variable holding the publishable API key.
pub const PUBLIC_KEY_VAR: &str = "VELU_BACKEND_PUBLIC_KEY";

/// The two strings needed to reach the hosted backend.
///
/// Missing values become empty strings rather than errors. A handle built
/// from an incomplete config cannot reach anything, and the first real
/// request surfaces that; configuration loading itself never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend service.
    pub url: String,
    /// Publishable key sent with every request.
    pub public_key: String,
}

impl BackendConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`BackendConfig::from_env`] with an injected lookup, so callers
    /// and tests never have to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: lookup(URL_VAR).unwrap_or_default(),
            public_key: lookup(PUBLIC_KEY_VAR).unwrap_or_default(),
        }
    }

    /// Whether both values are present.
    pub fn is_complete(&self) -> bool {
        !self.url.is_empty() && !self.public_key.is_empty()
    }
}
