// Central Error Type for the Client
//
// One variant per failure kind; causes are attached as `source`, never
// folded into the message string.

use crate::domain::version::{ApiVersion, SupportedVersions};
use thiserror::Error;

/// Boxed underlying cause (transport library errors)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Version,
    Transport,
    Decode,
    Validation,
    Encode,
    Config,
}

/// The configured API version is outside a response model's valid range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{resource} requires API {supported}, but the client is configured for v{configured}")]
pub struct VersionError {
    pub resource: &'static str,
    pub configured: ApiVersion,
    pub supported: SupportedVersions,
}

/// HTTP level failures
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed")]
    Connection {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("{url} returned status {status}, expected {expected}: {body}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        expected: u16,
        body: String,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl TransportError {
    /// HTTP status for `UnexpectedStatus`, None otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A response body did not match the expected JSON shape
#[derive(Error, Debug)]
#[error("error decoding {resource} response")]
pub struct DecodeError {
    pub resource: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Client-level error type
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Version(_) => ErrorKind::Version,
            ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::Decode(_) => ErrorKind::Decode,
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Encode(_) => ErrorKind::Encode,
            ClientError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
