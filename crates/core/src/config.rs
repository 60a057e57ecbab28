// Client Configuration
//
// Supplied externally (file, environment, flags); the client never persists it.

use crate::domain::ApiVersion;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for a single server
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL, e.g. `https://rundeck.example.com`
    pub url: String,

    /// API token sent as `X-Rundeck-Auth-Token`
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub api_version: ApiVersion,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            api_version: ApiVersion::DEFAULT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = ApiVersion::new(version);
        self
    }

    /// Base URL without trailing slashes
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url();
        if url.is_empty() {
            return Err(ClientError::Config("server URL cannot be empty".to_string()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "server URL must start with http:// or https:// (got '{}')",
                self.url
            )));
        }
        if self.api_version < ApiVersion::MINIMUM {
            return Err(ClientError::Config(format!(
                "API version {} is below the minimum supported version {}",
                self.api_version,
                ApiVersion::MINIMUM
            )));
        }
        if matches!(&self.token, Some(t) if t.trim().is_empty()) {
            return Err(ClientError::Config("API token cannot be blank".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .finish()
    }
}
