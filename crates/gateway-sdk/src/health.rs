use crate::client::ApiError;

/// Health-check interface for gateway clients.
pub trait HealthCheck: Send + Sync {
    /// Returns `Ok(true)` if the gateway answered with a 2xx status,
    /// `Ok(false)` if it answered with anything else, or `Err` when the
    /// request could not be completed.
    fn is_healthy(&self) -> impl std::future::Future<Output = Result<bool, ApiError>> + Send;
}
