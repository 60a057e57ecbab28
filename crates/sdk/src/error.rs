//! SDK Error Types
//!
//! The taxonomy lives in `rundeck-core`; this module maps reqwest failures
//! onto it.

pub use rundeck_core::error::{
    ClientError, DecodeError, ErrorKind, Result, TransportError, VersionError,
};

use reqwest::Url;

/// Wrap a reqwest send failure, keeping it as the source
pub(crate) fn connection_error(url: &Url, err: reqwest::Error) -> TransportError {
    TransportError::Connection {
        url: url.to_string(),
        source: Box::new(err),
    }
}

pub(crate) fn body_error(url: &Url, err: reqwest::Error) -> TransportError {
    TransportError::Body {
        url: url.to_string(),
        source: Box::new(err),
    }
}

pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> TransportError {
    TransportError::InvalidUrl {
        url: url.to_string(),
        reason: reason.into(),
    }
}
