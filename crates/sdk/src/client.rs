//! Rundeck Client Implementation

use crate::error::{ClientError, DecodeError, Result};
use crate::requests::UserInfoRequest;
use crate::responses::{ListUsersResponse, SystemAclPoliciesResponse, UserProfileResponse};
use crate::transport::HttpTransport;
use rundeck_core::domain::{
    path_login, AclPolicyCollection, ApiVersion, User, UserProfileUpdate, Users, Versioned,
};
use rundeck_core::port::{ApiRequest, Transport};
use rundeck_core::ClientConfig;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

/// Rundeck API Client
///
/// Every method runs the API version gate for its response model before
/// touching the network, then sends one request and decodes the reply.
///
/// # Example
///
/// ```no_run
/// use rundeck_sdk::{ClientConfig, RundeckClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RundeckClient::new(ClientConfig::new("http://127.0.0.1:4440"))?;
/// let me = client.get_current_user_profile().await?;
/// println!("logged in as {}", me.login);
/// # Ok(())
/// # }
/// ```
pub struct RundeckClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl RundeckClient {
    /// Create a client that talks HTTP to `config.url`
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api_version(&self) -> ApiVersion {
        self.config.api_version
    }

    /// API version gate for response model `R`
    pub fn check_required_api_version<R: Versioned>(&self) -> Result<()> {
        R::check_version(self.api_version())?;
        Ok(())
    }

    /// List all users (`GET user/list`), in server order
    pub async fn list_users(&self) -> Result<Users> {
        self.check_required_api_version::<ListUsersResponse>()?;

        let request = ApiRequest::get(self.api_version(), ["user", "list"]);
        let ListUsersResponse(users): ListUsersResponse = self.fetch(&request).await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Profile of the authenticated user (`GET user/info`)
    pub async fn get_current_user_profile(&self) -> Result<User> {
        self.check_required_api_version::<UserProfileResponse>()?;

        let request = ApiRequest::get(self.api_version(), ["user", "info"]);
        let profile: UserProfileResponse = self.fetch(&request).await?;

        Ok(profile.into())
    }

    /// Profile of another user (`GET user/info/{login}`); requires admin rights
    pub async fn get_user_profile(&self, login: &str) -> Result<User> {
        self.check_required_api_version::<UserProfileResponse>()?;

        let login = path_login(login)?;

        let request = ApiRequest::get(self.api_version(), ["user", "info", login]);
        let profile: UserProfileResponse = self.fetch(&request).await?;

        Ok(profile.into())
    }

    /// Update the fields set in `update`
    ///
    /// Posts to `user/info` when `update.login` is the authenticated user,
    /// otherwise to the admin-scoped `user/info/{login}`.
    pub async fn modify_user_profile(&self, update: &UserProfileUpdate) -> Result<User> {
        self.check_required_api_version::<UserProfileResponse>()?;
        update.validate()?;
        let login = path_login(&update.login)?;

        let current = self.get_current_user_profile().await?;
        let segments: Vec<&str> = if current.login == login {
            vec!["user", "info"]
        } else {
            vec!["user", "info", login]
        };

        info!(
            target_login = %login,
            caller = %current.login,
            own_profile = segments.len() == 2,
            "Modifying user profile"
        );

        let body = serde_json::to_vec(&UserInfoRequest::from(update)).map_err(ClientError::Encode)?;
        let request = ApiRequest::post(self.api_version(), segments, body);
        let profile: UserProfileResponse = self.fetch(&request).await?;

        Ok(profile.into())
    }

    /// List the system ACL policy directory (`GET system/acl/`)
    pub async fn list_system_acl_policies(&self) -> Result<AclPolicyCollection> {
        self.check_required_api_version::<SystemAclPoliciesResponse>()?;

        let request = ApiRequest::get(self.api_version(), ["system", "acl", ""]);
        let listing: SystemAclPoliciesResponse = self.fetch(&request).await?;

        Ok(listing.into())
    }

    async fn fetch<R>(&self, request: &ApiRequest) -> Result<R>
    where
        R: Versioned + DeserializeOwned,
    {
        let body = self.transport.send(request).await?;
        decode(&body)
    }
}

/// Decode a response body, wrapping parse failures in a [`DecodeError`]
fn decode<R>(body: &[u8]) -> Result<R>
where
    R: Versioned + DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|source| {
        DecodeError {
            resource: R::RESOURCE,
            source,
        }
        .into()
    })
}
