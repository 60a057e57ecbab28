//! Rundeck SDK - Rust Client Library
//!
//! Typed access to the Rundeck HTTP API: every call is version-gated against
//! the configured API version, sent as JSON, and decoded into domain models.
//!
//! # Example
//!
//! ```no_run
//! use rundeck_sdk::{ClientConfig, RundeckClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://127.0.0.1:4440")
//!         .with_token("my-api-token")
//!         .with_api_version(27);
//!     let client = RundeckClient::new(config)?;
//!
//!     for user in client.list_users().await? {
//!         println!("{} <{}>", user.login, user.email);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod requests;
pub mod responses;
mod transport;

pub use client::RundeckClient;
pub use error::{ClientError, DecodeError, ErrorKind, Result, TransportError, VersionError};
pub use transport::{HttpTransport, AUTH_TOKEN_HEADER};

pub use rundeck_core::domain::{
    AclPolicy, AclPolicyCollection, ApiVersion, SupportedVersions, User, UserProfileUpdate, Users,
    Versioned, LOGIN_SENTINEL,
};
pub use rundeck_core::port::{ApiRequest, Method, Transport};
pub use rundeck_core::ClientConfig;
