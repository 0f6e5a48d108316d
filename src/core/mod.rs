//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Options, artifact records, query parameters
//! - **xdg**: XDG directory handling
//! - **version**: Artifact version ordering
//! - **gateway**: Search gateway trait and the catalog implementation
//! - **resource**: Base resource contract of the endpoints
//! - **providers**: artifactId and version option providers
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod gateway;
pub mod providers;
pub mod resource;
pub mod services;
pub mod types;
pub mod version;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{OptionsError, Result};
pub use services::Services;
