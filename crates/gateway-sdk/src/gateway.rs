use std::collections::BTreeMap;

use tracing::debug;

use crate::client::{ApiError, HttpClient};
use crate::config::GatewayConfig;
use crate::headers;
use crate::health::HealthCheck;
use crate::session::{RefreshRequest, SessionCreatePayload, SessionTokenBundle};

const HEALTH_PATH: &str = "/api/v1/sdk/health";
const CAPABILITIES_PATH: &str = "/api/v1/sdk/capabilities";
const SESSION_PATH: &str = "/api/v1/sdk/session";
const REFRESH_PATH: &str = "/api/v1/sdk/refresh";
const LOGOUT_PATH: &str = "/api/v1/sdk/logout";

/// Backend client for the gateway's `/api/v1/sdk` endpoints.
///
/// Configuration is fixed at construction. Clones share the same
/// transport and can be used from concurrent tasks.
#[derive(Clone)]
pub struct GatewayClient {
    http: HttpClient,
    api_key: String,
    project_id: Option<String>,
}

impl GatewayClient {
    /// Create a client for `base_url` (e.g. `http://gateway:3000`).
    ///
    /// Neither the URL nor the key is validated here; a bad value fails
    /// the first request that uses it.
    pub fn new(base_url: &str, api_key: &str, project_id: Option<&str>) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
            api_key: api_key.to_string(),
            project_id: project_id.map(str::to_string),
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            &config.api_key,
            config.project_id.as_deref(),
        )
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// The three identification headers: `x-api-key`, a fresh
    /// `x-correlation-id`, and `x-project-id` (empty when no project is set).
    pub fn canonical_headers(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (headers::API_KEY, self.api_key.clone()),
            (headers::CORRELATION_ID, headers::correlation_id()),
            (
                headers::PROJECT_ID,
                self.project_id.clone().unwrap_or_default(),
            ),
        ])
    }

    /// Canonical headers for the session endpoints: `x-project-id` is left
    /// out instead of sent empty when no project is configured.
    fn scoped_headers(&self) -> BTreeMap<&'static str, String> {
        let mut hdrs = self.canonical_headers();
        if self.project_id.is_none() {
            hdrs.remove(headers::PROJECT_ID);
        }
        hdrs
    }

    /// GET `/api/v1/sdk/health` and return the response status, whatever it is.
    ///
    /// Only `x-api-key` and `x-correlation-id` are sent. Transport failures
    /// are returned as-is.
    pub async fn health_status(&self) -> Result<u16, ApiError> {
        let correlation_id = headers::correlation_id();
        let req = self.http.get(
            HEALTH_PATH,
            [
                (headers::API_KEY, self.api_key.clone()),
                (headers::CORRELATION_ID, correlation_id.clone()),
            ],
        );
        let status = req.send().await?.status().as_u16();
        debug!(%correlation_id, status, "gateway health check");
        Ok(status)
    }

    /// GET `/api/v1/sdk/capabilities`.
    pub async fn capabilities(&self) -> Result<serde_json::Value, ApiError> {
        debug!(path = CAPABILITIES_PATH, "fetching gateway capabilities");
        let req = self.http.get(CAPABILITIES_PATH, self.scoped_headers());
        HttpClient::send_json(req).await
    }

    /// POST `/api/v1/sdk/session` to create an end-user session.
    ///
    /// A payload without `project_id` is scoped to the client's project.
    pub async fn create_session(
        &self,
        payload: &SessionCreatePayload,
    ) -> Result<SessionTokenBundle, ApiError> {
        let mut body = payload.clone();
        if body.project_id.is_none() {
            body.project_id = self.project_id.clone();
        }

        let mut hdrs = self.scoped_headers();
        hdrs.insert(headers::IDEMPOTENCY_KEY, headers::idempotency_key());
        hdrs.insert(headers::TIMESTAMP, headers::timestamp());
        hdrs.insert(headers::NONCE, headers::nonce());

        debug!(
            user_external_id = %body.user_external_id,
            project_id = body.project_id.as_deref().unwrap_or(""),
            "creating gateway session"
        );
        let req = self.http.post(SESSION_PATH, hdrs).json(&body);
        HttpClient::send_json(req).await
    }

    /// POST `/api/v1/sdk/refresh`. Only `x-correlation-id` is attached; no
    /// API key.
    pub async fn refresh(&self, refresh_token: &str) -> Result<SessionTokenBundle, ApiError> {
        debug!(path = REFRESH_PATH, "refreshing gateway session");
        let req = self
            .http
            .post(
                REFRESH_PATH,
                [(headers::CORRELATION_ID, headers::correlation_id())],
            )
            .json(&RefreshRequest { refresh_token });
        HttpClient::send_json(req).await
    }

    /// POST `/api/v1/sdk/logout` with the session's bearer token.
    pub async fn logout(&self, access_token: &str) -> Result<(), ApiError> {
        debug!(path = LOGOUT_PATH, "logging out gateway session");
        let req = self.http.post(
            LOGOUT_PATH,
            [
                ("authorization", format!("Bearer {access_token}")),
                (headers::CORRELATION_ID, headers::correlation_id()),
            ],
        );
        HttpClient::send_checked(req).await?;
        Ok(())
    }
}

impl HealthCheck for GatewayClient {
    async fn is_healthy(&self) -> Result<bool, ApiError> {
        let status = self.health_status().await?;
        Ok((200..300).contains(&status))
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.http.base_url())
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}
