// Rundeck Core - Domain Models, Version Gate & Ports
// NO HTTP dependencies: the transport is reached only through port::Transport

pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::ClientConfig;
pub use error::{ClientError, ErrorKind, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
