//! Command-line definition

use crate::config::ConfigOverrides;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use rundeck_sdk::LOGIN_SENTINEL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rundeck")]
#[command(about = "Rundeck API command-line client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Server base URL (overrides RUNDECK_URL and the config file)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// API token (overrides RUNDECK_TOKEN and the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Server API version (overrides RUNDECK_API_VERSION and the config file)
    #[arg(long, global = true)]
    pub api_version: Option<u32>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl GlobalArgs {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            url: self.url.clone(),
            token: self.token.clone(),
            api_version: self.api_version,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// System ACL policies
    Acl {
        #[command(subcommand)]
        command: AclCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List all users
    List,

    /// Show a user profile (the current user when no login is given)
    Info {
        /// Login of the user to show (requires admin)
        #[arg(short, long)]
        login: Option<String>,
    },

    /// Modify a user profile
    Modify {
        /// Login of the user to modify
        #[arg(short, long, default_value = LOGIN_SENTINEL)]
        login: String,

        /// New first name
        #[arg(long)]
        first_name: Option<String>,

        /// New last name
        #[arg(long)]
        last_name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AclCommands {
    /// List system ACL policies
    List,
}
