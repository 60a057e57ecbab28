// Domain Layer - Client-side entities and the API version gate

pub mod acl;
pub mod user;
pub mod version;

// Re-exports
pub use acl::{AclPolicy, AclPolicyCollection, ROOT_PARENT_PATH};
pub use user::{path_login, User, UserProfileUpdate, Users, LOGIN_SENTINEL};
pub use version::{ApiVersion, SupportedVersions, Versioned};
