//! Where the generation service lives.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Generation service endpoint (`[endpoint]` configuration section).
///
/// # Example
///
/// ```
/// use marquee_models::EndpointConfig;
///
/// let endpoint: EndpointConfig = toml::from_str(r#"base_url = "https://gen.example.com/""#)
///     .unwrap();
/// assert_eq!(endpoint.generate_url(), "https://gen.example.com/generate");
/// assert_eq!(endpoint.api_key_env(), "MARQUEE_API_KEY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointConfig {
    /// Service root; `/generate` is appended
    base_url: String,
    /// Name of the environment variable holding the bearer token
    api_key_env: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key_env: "MARQUEE_API_KEY".to_string(),
        }
    }
}

impl EndpointConfig {
    /// Full URL of the generate call.
    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.base_url.trim_end_matches('/'))
    }

    /// Bearer token from the environment, if set and not blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
