//! reqwest-backed implementation of the core `Transport` port

use crate::error::{body_error, connection_error, invalid_url, TransportError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use rundeck_core::port::{ApiRequest, Method, Transport};
use rundeck_core::ClientConfig;
use std::time::Duration;
use tracing::debug;

/// Header carrying the API token
pub const AUTH_TOKEN_HEADER: &str = "X-Rundeck-Auth-Token";

const JSON: &str = "application/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP transport bound to one server
pub struct HttpTransport {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let raw = config.base_url();
        let base_url = Url::parse(raw).map_err(|e| invalid_url(raw, e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid_url(raw, "URL cannot be used as a base"));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!("rundeck-cli/{}", rundeck_core::VERSION))
            .build()
            .map_err(|e| connection_error(&base_url, e))?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    /// `{base_url}/api/{version}/{segments...}`
    ///
    /// `.` and `..` segments are refused; the URL parser would resolve them
    /// against the preceding path.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        if let Some(segment) = request.segments.iter().find(|s| *s == "." || *s == "..") {
            return Err(invalid_url(
                &format!("{}/{}", self.base_url, request.path()),
                format!("path segment '{}' is not allowed", segment),
            ));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid_url(self.base_url.as_str(), "URL cannot be used as a base"))?
            .pop_if_empty()
            .push("api")
            .push(&request.version.to_string())
            .extend(&request.segments);
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, TransportError> {
        let url = self.url_for(request)?;

        let mut builder = match request.method {
            Method::Get => self.http.get(url.clone()),
            Method::Post => self.http.post(url.clone()),
        }
        .header(ACCEPT, JSON)
        .header(CONTENT_TYPE, JSON);

        if let Some(token) = &self.token {
            builder = builder.header(AUTH_TOKEN_HEADER, token);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!(method = %request.method, url = %url, "Sending API request");

        let response = builder
            .send()
            .await
            .map_err(|e| connection_error(&url, e))?;
        let status = response.status().as_u16();

        debug!(method = %request.method, url = %url, status, "API response received");

        if status != request.expected_status {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(url = %url, status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            return Err(TransportError::UnexpectedStatus {
                url: url.to_string(),
                status,
                expected: request.expected_status,
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| body_error(&url, e))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rundeck_core::domain::ApiVersion;

    fn transport(url: &str) -> HttpTransport {
        HttpTransport::new(&ClientConfig::new(url)).expect("valid url")
    }

    #[test]
    fn test_url_for_versioned_path() {
        let t = transport("http://localhost:4440/");
        let req = ApiRequest::get(ApiVersion::new(27), ["user", "list"]);

        assert_eq!(
            t.url_for(&req).unwrap().as_str(),
            "http://localhost:4440/api/27/user/list"
        );
    }

    #[test]
    fn test_url_for_keeps_base_path_and_trailing_slash() {
        let t = transport("https://ops.example.com/rundeck");
        let req = ApiRequest::get(ApiVersion::new(14), ["system", "acl", ""]);

        assert_eq!(
            t.url_for(&req).unwrap().as_str(),
            "https://ops.example.com/rundeck/api/14/system/acl/"
        );
    }

    #[test]
    fn test_url_for_encodes_login_segment() {
        let t = transport("http://localhost:4440");
        let req = ApiRequest::get(ApiVersion::new(21), ["user", "info", "jane doe/ops"]);

        assert_eq!(
            t.url_for(&req).unwrap().as_str(),
            "http://localhost:4440/api/21/user/info/jane%20doe%2Fops"
        );
    }

    #[test]
    fn test_url_for_refuses_dot_segments() {
        let t = transport("http://localhost:4440");

        for login in [".", ".."] {
            let req = ApiRequest::post(ApiVersion::new(27), ["user", "info", login], b"{}".to_vec());
            let err = t.url_for(&req).unwrap_err();
            assert!(matches!(err, TransportError::InvalidUrl { .. }), "login {:?}", login);
        }
    }

    #[test]
    fn test_new_rejects_unparseable_url() {
        let err = HttpTransport::new(&ClientConfig::new("not a url")).err().unwrap();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }
}
