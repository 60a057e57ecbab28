// Port Layer - Interfaces for external dependencies

pub mod transport;

// Re-exports
pub use transport::{ApiRequest, Method, Transport};
