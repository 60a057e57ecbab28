//! Logging setup
//!
//! Logs always go to stderr; stdout carries command output only.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "rundeck=warn,rundeck_cli=warn,rundeck_sdk=warn,rundeck_core=warn";

/// Initialize tracing from `RUST_LOG` and `RUNDECK_LOG_FORMAT` (`json` | `pretty`)
pub fn init() {
    let log_format = std::env::var("RUNDECK_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("warning: logging already initialized: {}", e);
    }
}
