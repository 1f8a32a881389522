/// Episode catalog: fetches page data through the cache
use crate::cache::{Lookup, PageCache};
use crate::config::PageSettings;
use crate::error::{Result, ServerError};
use podcastr_client::{ClientError, EpisodeSource};
use podcastr_core::{Episode, EpisodeDetail, HomeListing, Locale};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Catalog {
    source: Arc<dyn EpisodeSource>,
    cache: PageCache,
    locale: Locale,
    home_limit: usize,
    latest_count: usize,
}

impl Catalog {
    pub fn new(source: Arc<dyn EpisodeSource>, pages: &PageSettings, locale: Locale) -> Self {
        let capacity = NonZeroUsize::new(pages.episode_cache_capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            source,
            cache: PageCache::new(pages.home_revalidate(), pages.episode_revalidate(), capacity),
            locale,
            home_limit: pages.home_limit,
            latest_count: pages.latest_count,
        }
    }

    /// Home page listing, revalidated when stale
    pub async fn home(&self) -> Result<Arc<HomeListing>> {
        let stale = match self.cache.home().await {
            Lookup::Fresh(listing) => return Ok(listing),
            Lookup::Stale(listing) => Some(listing),
            Lookup::Missing => None,
        };

        match self.fetch_home().await {
            Ok(listing) => Ok(self.cache.store_home(listing).await),
            Err(e) => match stale {
                Some(listing) if e.is_transient() => {
                    warn!("Serving stale home listing: {}", e);
                    Ok(listing)
                }
                _ => Err(e.into()),
            },
        }
    }

    /// Episode page data, revalidated when stale
    pub async fn episode(&self, id: &str) -> Result<Arc<EpisodeDetail>> {
        let stale = match self.cache.episode(id).await {
            Lookup::Fresh(detail) => return Ok(detail),
            Lookup::Stale(detail) => Some(detail),
            Lookup::Missing => None,
        };

        match self.fetch_episode(id).await {
            Ok(detail) => Ok(self.cache.store_episode(detail).await),
            Err(ServerError::Upstream(ClientError::NotFound(_))) => {
                self.cache.forget_episode(id).await;
                Err(ServerError::NotFound(id.to_string()))
            }
            Err(e) => match stale {
                Some(detail) if e.is_transient() => {
                    warn!(episode_id = %id, "Serving stale episode: {}", e);
                    Ok(detail)
                }
                _ => Err(e),
            },
        }
    }

    async fn fetch_home(&self) -> std::result::Result<HomeListing, ClientError> {
        let records = self.source.latest_episodes(self.home_limit).await?;

        let episodes: Vec<Episode> = records
            .iter()
            .filter_map(|record| match record.to_episode(self.locale) {
                Ok(episode) => Some(episode),
                Err(e) => {
                    warn!(episode_id = %record.id, "Skipping episode: {}", e);
                    None
                }
            })
            .collect();

        info!(count = episodes.len(), "Home listing revalidated");
        Ok(HomeListing::split(episodes, self.latest_count))
    }

    async fn fetch_episode(&self, id: &str) -> Result<EpisodeDetail> {
        let record = self.source.episode(id).await?;
        debug!(episode_id = %id, "Episode revalidated");

        record
            .to_detail(self.locale)
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
