//! Backend SDK for the gateway's `/api/v1/sdk` endpoints.
//!
//! ```no_run
//! # async fn run() -> Result<(), gateway_sdk::ApiError> {
//! let client =
//!     gateway_sdk::GatewayClient::new("http://gateway:3000", "key-1", Some("project-1"))?;
//! let status = client.health_status().await?;
//! println!("gateway answered {status}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod gateway;
pub mod headers;
pub mod health;
pub mod session;

pub use client::{ApiError, HttpClient};
pub use config::{ConfigError, GatewayConfig};
pub use gateway::GatewayClient;
pub use health::HealthCheck;
pub use session::{
    DeviceInfo, DeviceType, SessionCreatePayload, SessionTokenBundle, SessionUser, UserData,
};
