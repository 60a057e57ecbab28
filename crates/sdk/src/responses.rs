//! Response Models
//!
//! Mirror the server's JSON. Each model declares the API versions its schema
//! is valid for and converts into the matching domain model.

use chrono::{DateTime, Utc};
use rundeck_core::domain::{AclPolicy, AclPolicyCollection, SupportedVersions, User, Versioned};
use serde::Deserialize;

/// One entry of `GET user/list`
///
/// `created`, `updated`, `lastJob` and `tokens` are only sent from API v27.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub last_job: Option<DateTime<Utc>>,
    pub tokens: Option<u32>,
}

impl From<UserResponse> for User {
    fn from(u: UserResponse) -> Self {
        User {
            login: u.login,
            first_name: u.first_name.unwrap_or_default(),
            last_name: u.last_name.unwrap_or_default(),
            email: u.email.unwrap_or_default(),
            created: u.created,
            updated: u.updated,
            last_job: u.last_job,
            tokens: u.tokens.unwrap_or_default(),
        }
    }
}

/// `GET user/list`
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ListUsersResponse(pub Vec<UserResponse>);

impl Versioned for ListUsersResponse {
    const RESOURCE: &'static str = "user list";
    const SUPPORTED: SupportedVersions = SupportedVersions::since(21);
}

/// `GET user/info`, `GET user/info/{login}` and `POST` to either path
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Versioned for UserProfileResponse {
    const RESOURCE: &'static str = "user profile";
    const SUPPORTED: SupportedVersions = SupportedVersions::since(21);
}

impl From<UserProfileResponse> for User {
    fn from(u: UserProfileResponse) -> Self {
        User {
            login: u.login,
            first_name: u.first_name.unwrap_or_default(),
            last_name: u.last_name.unwrap_or_default(),
            email: u.email.unwrap_or_default(),
            ..Default::default()
        }
    }
}

/// One file of the system ACL directory
#[derive(Debug, Clone, Deserialize)]
pub struct AclResourceResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub href: String,
}

/// `GET system/acl/`
#[derive(Debug, Clone, Deserialize)]
pub struct SystemAclPoliciesResponse {
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub resources: Vec<AclResourceResponse>,
}

impl Versioned for SystemAclPoliciesResponse {
    const RESOURCE: &'static str = "system ACL policies";
    const SUPPORTED: SupportedVersions = SupportedVersions::since(14);
}

impl From<SystemAclPoliciesResponse> for AclPolicyCollection {
    fn from(r: SystemAclPoliciesResponse) -> Self {
        AclPolicyCollection {
            path: r.path,
            policy_type: r.resource_type,
            href: r.href,
            resources: r
                .resources
                .into_iter()
                .map(|p| AclPolicy {
                    name: p.name,
                    path: p.path,
                    policy_type: p.resource_type,
                    href: p.href,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_list_v27_fields() {
        let json = r#"[{
            "login": "admin",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "created": "2017-10-01T09:00:20Z",
            "updated": "2018-08-24T13:53:02Z",
            "lastJob": "2018-08-28T13:31:00Z",
            "tokens": 6
        }]"#;

        let ListUsersResponse(users): ListUsersResponse = serde_json::from_str(json).unwrap();
        let user = User::from(users[0].clone());

        assert_eq!(user.login, "admin");
        assert_eq!(
            user.created,
            Some(Utc.with_ymd_and_hms(2017, 10, 1, 9, 0, 20).unwrap())
        );
        assert_eq!(
            user.last_job,
            Some(Utc.with_ymd_and_hms(2018, 8, 28, 13, 31, 0).unwrap())
        );
        assert_eq!(user.tokens, 6);
    }

    #[test]
    fn test_user_list_pre_v27_leaves_fields_unset() {
        let json = r#"[{"login": "ops", "firstName": null, "email": "ops@example.com"}]"#;

        let ListUsersResponse(users): ListUsersResponse = serde_json::from_str(json).unwrap();
        let user = User::from(users[0].clone());

        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
        assert!(user.created.is_none());
        assert!(user.updated.is_none());
        assert!(user.last_job.is_none());
        assert_eq!(user.tokens, 0);
    }

    #[test]
    fn test_acl_listing_without_resources() {
        let json = r#"{"path": "", "type": "directory", "href": "http://x/api/14/system/acl/"}"#;

        let collection: AclPolicyCollection =
            serde_json::from_str::<SystemAclPoliciesResponse>(json)
                .unwrap()
                .into();

        assert_eq!(collection.policy_type, "directory");
        assert!(collection.resources.is_empty());
        assert_eq!(collection.parent_path(), "/");
    }

    #[test]
    fn test_declared_versions() {
        assert_eq!(ListUsersResponse::SUPPORTED.min.get(), 21);
        assert_eq!(UserProfileResponse::SUPPORTED.min.get(), 21);
        assert_eq!(SystemAclPoliciesResponse::SUPPORTED.min.get(), 14);
        assert!(SystemAclPoliciesResponse::SUPPORTED.max.is_none());
    }
}
