//! Podcastr Server Library
//!
//! Page server for the Podcastr episode listing: server-rendered home and
//! episode pages backed by the episode API, with a revalidating cache and the
//! persistent browser player.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use services::Catalog;
pub use state::AppState;
