//! Identification headers attached to gateway requests.

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;

pub const API_KEY: &str = "x-api-key";
pub const CORRELATION_ID: &str = "x-correlation-id";
pub const PROJECT_ID: &str = "x-project-id";

pub const IDEMPOTENCY_KEY: &str = "idempotency-key";
pub const TIMESTAMP: &str = "x-timestamp";
pub const NONCE: &str = "x-nonce";

/// Prefix of every correlation id this SDK generates.
pub const CORRELATION_PREFIX: &str = "sdkjava_";

/// `sdkjava_<epoch-millis>`.
///
/// Only unique to millisecond resolution: two calls in the same
/// millisecond return the same id.
pub fn correlation_id() -> String {
    format!("{CORRELATION_PREFIX}{}", Utc::now().timestamp_millis())
}

/// `idem_<epoch-millis>`, sent on session creation.
pub fn idempotency_key() -> String {
    format!("idem_{}", Utc::now().timestamp_millis())
}

/// Current Unix time in whole seconds.
pub fn timestamp() -> String {
    Utc::now().timestamp().to_string()
}

/// `<epoch-millis>_<8 random alphanumerics>`.
pub fn nonce() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("{}_{suffix}", Utc::now().timestamp_millis())
}
