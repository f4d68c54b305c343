use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Longest slice of an error body kept in [`ApiError::ApiResponse`].
const MAX_ERROR_BODY: usize = 180;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("gateway returned {status}: {body}")]
    ApiResponse { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Shared transport for all gateway calls.
///
/// Wraps [`reqwest::Client`] with the gateway base URL. The base URL is kept
/// as given; a malformed value only surfaces when a request is sent.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let inner = reqwest::Client::builder().build()?;
        Ok(Self {
            inner,
            base_url: base_url.to_string(),
        })
    }

    /// `{base_url}{path}`. `path` is expected to start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a GET request to `path` carrying `headers`.
    pub fn get<'a, I>(&self, path: &str, headers: I) -> RequestBuilder
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        apply_headers(self.inner.get(self.url(path)), headers)
    }

    /// Start a POST request to `path` carrying `headers`.
    pub fn post<'a, I>(&self, path: &str, headers: I) -> RequestBuilder
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        apply_headers(self.inner.post(self.url(path)), headers)
    }

    /// Send `req` and deserialize a 2xx JSON body.
    ///
    /// A 204 is read as JSON `null`, so `T` decides whether an empty reply is
    /// acceptable (`serde_json::Value`, `Option<_>`) or an [`ApiError::Decode`].
    pub async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ApiError> {
        let resp = Self::send_checked(req).await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send `req`, turning non-2xx responses into [`ApiError::ApiResponse`].
    pub async fn send_checked(req: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = req.send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::ApiResponse {
                status,
                body: truncate_body(body),
            });
        }
        Ok(resp)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// Invalid header bytes are reported by reqwest when the request is sent.
fn apply_headers<'a, I>(mut req: RequestBuilder, headers: I) -> RequestBuilder
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    for (name, value) in headers {
        req = req.header(name, value);
    }
    req
}

fn truncate_body(body: String) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => body[..idx].to_string(),
        None => body,
    }
}
