//! Connection settings for [`GatewayClient`](crate::GatewayClient).

use serde::Deserialize;

pub const BASE_URL_VAR: &str = "GATEWAY_BASE_URL";
pub const API_KEY_VAR: &str = "GATEWAY_API_KEY";
pub const PROJECT_ID_VAR: &str = "GATEWAY_PROJECT_ID";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl GatewayConfig {
    /// Read `GATEWAY_BASE_URL`, `GATEWAY_API_KEY` and `GATEWAY_PROJECT_ID`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None, None)
    }

    /// Use the explicit values where given, falling back to the environment.
    ///
    /// Empty values count as unset, whichever source they come from.
    pub fn resolve(
        base_url: Option<String>,
        api_key: Option<String>,
        project_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = pick(base_url, BASE_URL_VAR).ok_or(ConfigError::Missing(BASE_URL_VAR))?;
        let api_key = pick(api_key, API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let project_id = pick(project_id, PROJECT_ID_VAR);

        Ok(Self {
            base_url,
            api_key,
            project_id,
        })
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .finish()
    }
}

fn pick(explicit: Option<String>, var: &str) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var(var).ok().filter(|v| !v.is_empty()))
}
