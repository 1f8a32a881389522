//! Revalidating page data cache
//!
//! Entries are fresh for a fixed period after they were fetched. Once an
//! entry is stale the caller refetches; if that fails, the stale entry is
//! still available as a fallback.

use lru::LruCache;
use podcastr_core::{EpisodeDetail, HomeListing};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

/// A cached value and when it was fetched
#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub value: Arc<T>,
    fetched_at: Instant,
}

impl<T> Entry<T> {
    fn new(value: Arc<T>) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Lookup result
#[derive(Debug, Clone)]
pub enum Lookup<T> {
    Fresh(Arc<T>),
    Stale(Arc<T>),
    Missing,
}

pub struct PageCache {
    home: RwLock<Option<Entry<HomeListing>>>,
    episodes: Mutex<LruCache<String, Entry<EpisodeDetail>>>,
    home_ttl: Duration,
    episode_ttl: Duration,
}

impl PageCache {
    pub fn new(home_ttl: Duration, episode_ttl: Duration, episode_capacity: NonZeroUsize) -> Self {
        Self {
            home: RwLock::new(None),
            episodes: Mutex::new(LruCache::new(episode_capacity)),
            home_ttl,
            episode_ttl,
        }
    }

    pub async fn home(&self) -> Lookup<HomeListing> {
        match self.home.read().await.as_ref() {
            Some(entry) if entry.is_fresh(self.home_ttl) => Lookup::Fresh(Arc::clone(&entry.value)),
            Some(entry) => Lookup::Stale(Arc::clone(&entry.value)),
            None => Lookup::Missing,
        }
    }

    pub async fn store_home(&self, listing: HomeListing) -> Arc<HomeListing> {
        let value = Arc::new(listing);
        *self.home.write().await = Some(Entry::new(Arc::clone(&value)));
        value
    }

    pub async fn episode(&self, id: &str) -> Lookup<EpisodeDetail> {
        let mut episodes = self.episodes.lock().await;
        match episodes.get(id) {
            Some(entry) if entry.is_fresh(self.episode_ttl) => {
                Lookup::Fresh(Arc::clone(&entry.value))
            }
            Some(entry) => Lookup::Stale(Arc::clone(&entry.value)),
            None => Lookup::Missing,
        }
    }

    pub async fn store_episode(&self, detail: EpisodeDetail) -> Arc<EpisodeDetail> {
        let value = Arc::new(detail);
        self.episodes
            .lock()
            .await
            .put(value.episode.id.clone(), Entry::new(Arc::clone(&value)));
        value
    }

    /// Drop an episode the API no longer knows about
    pub async fn forget_episode(&self, id: &str) {
        self.episodes.lock().await.pop(id);
    }

    pub async fn episode_count(&self) -> usize {
        self.episodes.lock().await.len()
    }
}
