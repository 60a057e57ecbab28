//! Command handlers
//!
//! Each handler calls one client method and renders the result. Client
//! errors are returned unchanged.

pub mod acl;
pub mod users;

use crate::cli::{AclCommands, Commands, UserCommands};
use crate::context::CommandContext;
use anyhow::Result;
use rundeck_sdk::UserProfileUpdate;
use std::io::Write;

/// Dispatches the command to the appropriate handler
pub async fn dispatch<W: Write>(ctx: &mut CommandContext<W>, command: Commands) -> Result<()> {
    match command {
        Commands::User { command } => match command {
            UserCommands::List => users::list(ctx).await,
            UserCommands::Info { login } => users::info(ctx, login.as_deref()).await,
            UserCommands::Modify {
                login,
                first_name,
                last_name,
                email,
            } => {
                let update = UserProfileUpdate {
                    login,
                    first_name,
                    last_name,
                    email,
                };
                users::modify(ctx, &update).await
            }
        },
        Commands::Acl { command } => match command {
            AclCommands::List => acl::list(ctx).await,
        },
    }
}
