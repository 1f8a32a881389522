//! Episode API client.

use crate::error::{ClientError, Result};
use crate::source::EpisodeSource;
use crate::types::ClientConfig;
use async_trait::async_trait;
use podcastr_core::EpisodeRecord;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

/// Client for the episode API.
///
/// # Example
///
/// ```ignore
/// use podcastr_client::{ClientConfig, PodcastrClient};
///
/// let client = PodcastrClient::new(ClientConfig::new("http://localhost:3333"))?;
/// let episodes = client.list_episodes(12).await?;
/// println!("Found {} episodes", episodes.len());
/// ```
#[derive(Debug, Clone)]
pub struct PodcastrClient {
    http: Client,
    base_url: Url,
}

impl PodcastrClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let raw = config.base_url.trim();
        if raw.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url =
            Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Podcastr/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL of the API.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the newest episodes, newest first.
    ///
    /// `GET /episodes?_limit={limit}&_sort=published_at&_order=desc`
    pub async fn list_episodes(&self, limit: usize) -> Result<Vec<EpisodeRecord>> {
        let mut url = self.endpoint(&["episodes"])?;
        url.query_pairs_mut()
            .append_pair("_limit", &limit.to_string())
            .append_pair("_sort", "published_at")
            .append_pair("_order", "desc");

        debug!(url = %url, "Fetching episode list");

        let response = self.send(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(server_error(response).await);
        }

        let episodes: Vec<EpisodeRecord> = parse_json(response, "episode list").await?;
        info!(count = episodes.len(), "Fetched episodes");
        Ok(episodes)
    }

    /// Fetch a single episode.
    ///
    /// `GET /episodes/{id}`; a 404 becomes [`ClientError::NotFound`].
    pub async fn get_episode(&self, id: &str) -> Result<EpisodeRecord> {
        let url = self.endpoint(&["episodes", id])?;

        debug!(url = %url, episode_id = %id, "Fetching episode");

        let response = self.send(url).await?;
        match response.status() {
            status if status.is_success() => parse_json(response, "episode").await,
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id.to_string())),
            _ => Err(server_error(response).await),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<Response> {
        self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }
}

#[async_trait]
impl EpisodeSource for PodcastrClient {
    async fn latest_episodes(&self, limit: usize) -> Result<Vec<EpisodeRecord>> {
        self.list_episodes(limit).await
    }

    async fn episode(&self, id: &str) -> Result<EpisodeRecord> {
        self.get_episode(id).await
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

async fn server_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ClientError::ServerError { status, message }
}
