//! Podcastr Episode API Client
//!
//! HTTP client library for the episode API that backs the Podcastr pages.
//!
//! # Features
//!
//! - **Listing**: newest episodes first, with a limit
//! - **Detail**: a single episode by id
//! - **Abstraction**: [`EpisodeSource`] lets callers swap in other sources
//!
//! # Example
//!
//! ```ignore
//! use podcastr_client::{ClientConfig, PodcastrClient};
//! use podcastr_core::Locale;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PodcastrClient::new(ClientConfig::new("http://localhost:3333"))?;
//!
//!     for record in client.list_episodes(12).await? {
//!         let episode = record.to_episode(Locale::PtBr)?;
//!         println!("{} ({})", episode.title, episode.duration);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod source;
mod types;

pub use client::PodcastrClient;
pub use error::{ClientError, Result};
pub use source::EpisodeSource;
pub use types::ClientConfig;
