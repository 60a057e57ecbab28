// User Domain Model

use crate::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login value the CLI uses when no `--login` was given
pub const LOGIN_SENTINEL: &str = "nil";

/// A server user as seen by the client
///
/// Timestamps and the token count only exist on API v27+ servers; older
/// servers leave them unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub last_job: Option<DateTime<Utc>>,
    pub tokens: u32,
}

/// Users in server response order
pub type Users = Vec<User>;

/// Partial user used by profile updates: only `Some` fields are changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfileUpdate {
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UserProfileUpdate {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Default::default()
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when the login is empty or the CLI sentinel
    pub fn login_is_unset(&self) -> bool {
        let login = self.login.trim();
        login.is_empty() || login == LOGIN_SENTINEL
    }

    pub fn has_changes(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some() || self.email.is_some()
    }

    /// Reject updates that name no target user or change nothing
    pub fn validate(&self) -> Result<()> {
        if self.login_is_unset() || !self.has_changes() {
            return Err(ClientError::Validation(
                "must provide login and at least one field to update".to_string(),
            ));
        }
        path_login(&self.login)?;
        Ok(())
    }
}

/// Trimmed login, checked for use as a single URL path segment
///
/// `.` and `..` are rejected: URL normalization would collapse them and
/// address a different resource.
pub fn path_login(login: &str) -> Result<&str> {
    let login = login.trim();
    if login.is_empty() {
        return Err(ClientError::Validation("login cannot be empty".to_string()));
    }
    if login == "." || login == ".." {
        return Err(ClientError::Validation(format!(
            "'{}' is not a valid login",
            login
        )));
    }
    Ok(login)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate_sentinel_login_without_fields() {
        let update = UserProfileUpdate::new(LOGIN_SENTINEL);

        let err = update.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("must provide login"));
    }

    #[test]
    fn test_validate_sentinel_login_with_fields() {
        let update = UserProfileUpdate::new("nil").email("ops@example.com");
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_validate_empty_login() {
        let update = UserProfileUpdate::new("  ").first_name("Ada");
        assert!(update.login_is_unset());
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_validate_no_changes() {
        let update = UserProfileUpdate::new("admin");
        assert!(!update.has_changes());
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_validate_valid_update() {
        let update = UserProfileUpdate::new("admin")
            .first_name("Ada")
            .last_name("Lovelace");

        assert!(update.has_changes());
        assert!(update.validate().is_ok());
        assert!(update.email.is_none());
    }

    #[test]
    fn test_validate_rejects_dot_segment_logins() {
        for login in [".", "..", " .. "] {
            let err = UserProfileUpdate::new(login)
                .email("ops@example.com")
                .validate()
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "login {:?}", login);
        }
    }

    #[test]
    fn test_path_login_trims_whitespace() {
        assert_eq!(path_login("  admin ").unwrap(), "admin");
        assert_eq!(path_login("a.b").unwrap(), "a.b");
        assert!(path_login(" ").is_err());
    }

    #[test]
    fn test_default_user_has_no_timestamps() {
        let user = User::default();
        assert!(user.created.is_none());
        assert!(user.updated.is_none());
        assert!(user.last_job.is_none());
        assert_eq!(user.tokens, 0);
    }
}
