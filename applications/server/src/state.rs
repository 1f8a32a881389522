/// Shared application state
use crate::config::AppConfig;
use crate::services::Catalog;
use podcastr_client::EpisodeSource;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(source: Arc<dyn EpisodeSource>, config: AppConfig) -> Self {
        let catalog = Catalog::new(source, &config.pages, config.display.locale);

        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
