// API Version Gate
//
// Every response model declares the server API versions in which its schema
// is valid. The gate compares that range with the configured client version
// before a request is built.

use crate::error::VersionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server API version number (the `{version}` segment of `/api/{version}/...`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiVersion(u32);

impl ApiVersion {
    /// Version used when nothing is configured
    pub const DEFAULT: ApiVersion = ApiVersion(27);

    /// Oldest API version the client can talk to at all
    pub const MINIMUM: ApiVersion = ApiVersion(11);

    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for ApiVersion {
    fn from(version: u32) -> Self {
        Self(version)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of API versions a schema is valid for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedVersions {
    pub min: ApiVersion,
    pub max: Option<ApiVersion>,
}

impl SupportedVersions {
    /// Valid from `min` onwards
    pub const fn since(min: u32) -> Self {
        Self {
            min: ApiVersion(min),
            max: None,
        }
    }

    /// Valid from `min` up to and including `max`
    pub const fn between(min: u32, max: u32) -> Self {
        Self {
            min: ApiVersion(min),
            max: Some(ApiVersion(max)),
        }
    }

    pub fn contains(&self, version: ApiVersion) -> bool {
        version >= self.min && self.max.map_or(true, |max| version <= max)
    }

    /// Fail with a [`VersionError`] when `configured` is outside the range
    pub fn check(
        &self,
        resource: &'static str,
        configured: ApiVersion,
    ) -> Result<(), VersionError> {
        if self.contains(configured) {
            return Ok(());
        }

        tracing::debug!(
            resource,
            configured = configured.get(),
            supported = %self,
            "API version gate rejected call"
        );

        Err(VersionError {
            resource,
            configured,
            supported: *self,
        })
    }
}

impl fmt::Display for SupportedVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "v{} to v{}", self.min, max),
            None => write!(f, "v{} or later", self.min),
        }
    }
}

/// Implemented by every response model the client decodes
pub trait Versioned {
    /// Human readable name used in error messages
    const RESOURCE: &'static str;

    const SUPPORTED: SupportedVersions;

    fn check_version(configured: ApiVersion) -> Result<(), VersionError> {
        Self::SUPPORTED.check(Self::RESOURCE, configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Legacy;

    impl Versioned for Legacy {
        const RESOURCE: &'static str = "legacy listing";
        const SUPPORTED: SupportedVersions = SupportedVersions::between(11, 20);
    }

    #[test]
    fn test_open_ended_range() {
        let range = SupportedVersions::since(21);

        assert!(!range.contains(ApiVersion::new(20)));
        assert!(range.contains(ApiVersion::new(21)));
        assert!(range.contains(ApiVersion::new(45)));
    }

    #[test]
    fn test_bounded_range() {
        let range = SupportedVersions::between(14, 20);

        assert!(!range.contains(ApiVersion::new(13)));
        assert!(range.contains(ApiVersion::new(14)));
        assert!(range.contains(ApiVersion::new(20)));
        assert!(!range.contains(ApiVersion::new(21)));
    }

    #[test]
    fn test_min_above_configured_is_rejected_for_every_lower_version() {
        let range = SupportedVersions::since(21);

        for v in ApiVersion::MINIMUM.get()..21 {
            let err = range.check("user list", ApiVersion::new(v)).unwrap_err();
            assert_eq!(err.configured, ApiVersion::new(v));
            assert_eq!(err.supported, range);
        }
    }

    #[test]
    fn test_versioned_trait_uses_declared_range() {
        assert!(Legacy::check_version(ApiVersion::new(12)).is_ok());

        let err = Legacy::check_version(ApiVersion::new(27)).unwrap_err();
        assert_eq!(err.resource, "legacy listing");
        assert!(err.to_string().contains("v11 to v20"));
    }

    #[test]
    fn test_api_version_is_transparent_in_json() {
        let v: ApiVersion = serde_json::from_str("24").unwrap();
        assert_eq!(v, ApiVersion::new(24));
        assert_eq!(serde_json::to_string(&v).unwrap(), "24");
    }
}
