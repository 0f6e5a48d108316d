//! RunDeck option provider for artifact repositories
//!
//! Serves the remote option lists RunDeck uses to fill its
//! "artifactId" and "version" dropdowns, answered from an artifact
//! search index.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - version (artifact version ordering)
//!   - gateway (search gateway trait, JSON catalog)
//!   - resource, providers (the two option endpoints)
//!   - services (unified service container)
//!
//! - **http**: REST adapter (depends on core)
//!   - router, handlers, middleware
//!
//! - **cli**: command-line adapter (depends on core)
//!
//! # Endpoints
//!
//! - `GET /rundeck/options/artifactId?r=<repo>&g=<groupId>...`
//! - `GET /rundeck/options/version?r=<repo>&g=..&a=..&includeLatest=true&includeRelease=true&l=10`

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{OptionsError, Result};
pub use core::gateway::{CatalogGateway, SearchGateway, SearchType};
pub use core::providers::{ArtifactIdOptionProvider, OptionProvider, VersionOptionProvider};
pub use core::services::Services;
pub use core::types::{ArtifactRecord, QueryParams, RundeckOption};
