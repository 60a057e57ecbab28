//! Request Models

use rundeck_core::domain::UserProfileUpdate;
use serde::Serialize;

/// Body of `POST user/info[/{login}]`; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&UserProfileUpdate> for UserInfoRequest {
    fn from(update: &UserProfileUpdate) -> Self {
        Self {
            first_name: update.first_name.clone(),
            last_name: update.last_name.clone(),
            email: update.email.clone(),
        }
    }
}
