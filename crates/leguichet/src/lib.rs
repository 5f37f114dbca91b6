//! leguichet - HTTP Front Desk
//!
//! *Le Guichet* (The Counter) - Axum-based HTTP surface for the DeConcierge matching engine

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// API error types
pub mod error;

/// HTTP handlers for REST endpoints
pub mod handlers;

/// Server configuration from TOML, environment or CLI
pub mod config;

/// Inbound intent sanitization
pub mod sanitize;

/// Server instance management
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::GuichetServer;
