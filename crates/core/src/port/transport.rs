// Transport Port (Interface)

use crate::domain::ApiVersion;
use crate::error::TransportError;
use async_trait::async_trait;
use std::fmt;

/// HTTP verbs the API client issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A versioned API call, relative to `{base_url}/api/{version}/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub version: ApiVersion,
    /// Path segments; each one is percent-encoded by the transport
    pub segments: Vec<String>,
    /// JSON body (POST only)
    pub body: Option<Vec<u8>>,
    pub expected_status: u16,
}

impl ApiRequest {
    pub fn get<I, S>(version: ApiVersion, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::Get,
            version,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
            expected_status: 200,
        }
    }

    pub fn post<I, S>(version: ApiVersion, segments: I, body: Vec<u8>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::Post,
            body: Some(body),
            ..Self::get(version, segments)
        }
    }

    pub fn expect(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Relative path as sent, e.g. `user/info/admin`
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// Issues API requests and returns the raw response body
///
/// Any status other than `request.expected_status` is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, TransportError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned reply for one route
    #[derive(Debug, Clone)]
    pub enum MockReply {
        /// Expected status with this body
        Body(String),
        /// Any other status
        Status { status: u16, body: String },
    }

    /// Route-table transport that records every request it receives
    #[derive(Default)]
    pub struct MockTransport {
        routes: HashMap<(Method, String), MockReply>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn on(mut self, method: Method, path: &str, reply: MockReply) -> Self {
            self.routes.insert((method, path.to_string()), reply);
            self
        }

        pub fn on_get(self, path: &str, body: impl Into<String>) -> Self {
            self.on(Method::Get, path, MockReply::Body(body.into()))
        }

        pub fn on_post(self, path: &str, body: impl Into<String>) -> Self {
            self.on(Method::Post, path, MockReply::Body(body.into()))
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, TransportError> {
            self.requests.lock().unwrap().push(request.clone());

            let url = format!("mock:///api/{}/{}", request.version, request.path());
            match self.routes.get(&(request.method, request.path())) {
                Some(MockReply::Body(body)) => Ok(body.clone().into_bytes()),
                Some(MockReply::Status { status, body }) => Err(TransportError::UnexpectedStatus {
                    url,
                    status: *status,
                    expected: request.expected_status,
                    body: body.clone(),
                }),
                None => Err(TransportError::UnexpectedStatus {
                    url,
                    status: 404,
                    expected: request.expected_status,
                    body: "no mock route".to_string(),
                }),
            }
        }
    }
}
