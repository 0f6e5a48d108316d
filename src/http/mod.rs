//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Serves the RunDeck option endpoints via the Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::router;
