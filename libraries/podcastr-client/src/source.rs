//! Episode source abstraction.

use crate::error::Result;
use async_trait::async_trait;
use podcastr_core::EpisodeRecord;

/// Anything that can supply episode records.
///
/// The page server only depends on this trait, so tests can swap the HTTP
/// client for an in-memory source.
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    /// Newest episodes first, at most `limit` of them
    async fn latest_episodes(&self, limit: usize) -> Result<Vec<EpisodeRecord>>;

    /// A single episode by id
    async fn episode(&self, id: &str) -> Result<EpisodeRecord>;
}
