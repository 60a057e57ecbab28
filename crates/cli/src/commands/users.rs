//! `rundeck user ...`

use crate::context::CommandContext;
use crate::output::format_timestamp;
use anyhow::Result;
use colored::Colorize;
use rundeck_sdk::{User, UserProfileUpdate};
use serde::Serialize;
use std::io::Write;
use tabled::Tabled;

/// Row of `user list`
#[derive(Debug, Tabled, Serialize)]
pub struct UserRow {
    #[tabled(rename = "Login")]
    pub login: String,
    #[tabled(rename = "First Name")]
    pub first_name: String,
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Created")]
    pub created: String,
    #[tabled(rename = "Updated")]
    pub updated: String,
    #[tabled(rename = "Last Job")]
    pub last_job: String,
    #[tabled(rename = "Tokens")]
    pub tokens: u32,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            login: u.login.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
            created: format_timestamp(u.created),
            updated: format_timestamp(u.updated),
            last_job: format_timestamp(u.last_job),
            tokens: u.tokens,
        }
    }
}

/// Row of `user info` and `user modify`
#[derive(Debug, Tabled, Serialize)]
pub struct ProfileRow {
    #[tabled(rename = "Login")]
    pub login: String,
    #[tabled(rename = "First Name")]
    pub first_name: String,
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    #[tabled(rename = "Email")]
    pub email: String,
}

impl From<&User> for ProfileRow {
    fn from(u: &User) -> Self {
        Self {
            login: u.login.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
        }
    }
}

pub async fn list<W: Write>(ctx: &mut CommandContext<W>) -> Result<()> {
    let users = ctx.client.list_users().await?;
    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
    ctx.output.draw(&rows)
}

pub async fn info<W: Write>(ctx: &mut CommandContext<W>, login: Option<&str>) -> Result<()> {
    let user = match login {
        Some(login) => ctx.client.get_user_profile(login).await?,
        None => ctx.client.get_current_user_profile().await?,
    };
    ctx.output.draw(&[ProfileRow::from(&user)])
}

pub async fn modify<W: Write>(ctx: &mut CommandContext<W>, update: &UserProfileUpdate) -> Result<()> {
    let user = ctx.client.modify_user_profile(update).await?;
    ctx.output.notice(
        format!("✓ Profile of {} updated", user.login)
            .green()
            .bold(),
    )?;
    ctx.output.draw(&[ProfileRow::from(&user)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{OutputFormat, OutputFormatter};
    use rundeck_core::port::transport::mocks::MockTransport;
    use rundeck_sdk::{ClientConfig, ClientError, ErrorKind, RundeckClient};
    use std::sync::Arc;

    fn context(transport: Arc<MockTransport>, format: OutputFormat) -> CommandContext<Vec<u8>> {
        let config = ClientConfig::new("http://localhost:4440").with_api_version(27);
        let client = RundeckClient::with_transport(config, transport).unwrap();
        CommandContext::new(client, OutputFormatter::new(format, Vec::new()))
    }

    #[tokio::test]
    async fn test_list_renders_all_columns() {
        let transport = Arc::new(MockTransport::new().on_get(
            "user/list",
            r#"[
                {"login":"admin","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com",
                 "created":"2017-10-01T09:00:20Z","tokens":3},
                {"login":"ops"}
            ]"#,
        ));
        let mut ctx = context(transport, OutputFormat::Table);

        list(&mut ctx).await.unwrap();
        let text = String::from_utf8(ctx.into_output()).unwrap();

        let header = text.lines().next().unwrap();
        for column in [
            "Login",
            "First Name",
            "Last Name",
            "Email",
            "Created",
            "Updated",
            "Last Job",
            "Tokens",
        ] {
            assert!(header.contains(column), "missing column {}", column);
        }
        assert!(text.contains("2017-10-01T09:00:20Z"));
        assert!(text.find("admin").unwrap() < text.find("ops").unwrap());
    }

    #[tokio::test]
    async fn test_info_without_login_uses_current_user() {
        let transport = Arc::new(
            MockTransport::new().on_get("user/info", r#"{"login":"admin","email":"a@x.io"}"#),
        );
        let mut ctx = context(transport.clone(), OutputFormat::Json);

        info(&mut ctx, None).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&ctx.into_output()).unwrap();
        assert_eq!(value[0]["login"], "admin");
        assert_eq!(value[0]["email"], "a@x.io");
        assert_eq!(transport.requests()[0].path(), "user/info");
    }

    #[tokio::test]
    async fn test_modify_error_propagates_unchanged() {
        let transport = Arc::new(MockTransport::new());
        let mut ctx = context(transport.clone(), OutputFormat::Table);

        let err = modify(&mut ctx, &UserProfileUpdate::new("nil"))
            .await
            .unwrap_err();

        let client_err = err.downcast_ref::<ClientError>().expect("client error");
        assert_eq!(client_err.kind(), ErrorKind::Validation);
        assert_eq!(transport.call_count(), 0);
        assert!(ctx.into_output().is_empty());
    }
}
