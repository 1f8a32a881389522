/// Server configuration
use crate::error::{Result, ServerError};
use podcastr_core::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Default configuration file, read when present
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_pages")]
    pub pages: PageSettings,

    #[serde(default = "default_display")]
    pub display: DisplaySettings,

    #[serde(default = "default_assets")]
    pub assets: AssetSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where episode data comes from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Listing size and revalidation periods
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageSettings {
    /// Episodes fetched for the home page
    #[serde(default = "default_home_limit")]
    pub home_limit: usize,

    /// Episodes featured as cards above the table
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,

    #[serde(default = "default_home_revalidate_secs")]
    pub home_revalidate_secs: u64,

    #[serde(default = "default_episode_revalidate_secs")]
    pub episode_revalidate_secs: u64,

    /// Episode pages kept in memory
    #[serde(default = "default_episode_cache_capacity")]
    pub episode_cache_capacity: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub locale: Locale,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Icons, images and stylesheets served at the site root
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// wasm-pack output for the browser player, served under `/pkg`
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `podcastr.toml` is read if
    /// present. Environment variables override file values, e.g.
    /// `PODCASTR__SERVER__PORT=8080`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ServerError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.api.base_url.trim()).map_err(|e| {
            ServerError::Config(format!("Invalid API URL {:?}: {}", self.api.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ServerError::Config(format!(
                "API URL must be an http:// or https:// address (got {:?})",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ServerError::Config(
                "API timeout must be at least one second".to_string(),
            ));
        }

        if self.pages.home_limit == 0 {
            return Err(ServerError::Config(
                "pages.home_limit must be greater than zero".to_string(),
            ));
        }

        if self.pages.episode_cache_capacity == 0 {
            return Err(ServerError::Config(
                "pages.episode_cache_capacity must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PageSettings {
    pub fn home_revalidate(&self) -> Duration {
        Duration::from_secs(self.home_revalidate_secs)
    }

    pub fn episode_revalidate(&self) -> Duration {
        Duration::from_secs(self.episode_revalidate_secs)
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_api_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_api_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_pages() -> PageSettings {
    PageSettings {
        home_limit: default_home_limit(),
        latest_count: default_latest_count(),
        home_revalidate_secs: default_home_revalidate_secs(),
        episode_revalidate_secs: default_episode_revalidate_secs(),
        episode_cache_capacity: default_episode_cache_capacity(),
    }
}

fn default_home_limit() -> usize {
    20
}

fn default_latest_count() -> usize {
    2
}

fn default_home_revalidate_secs() -> u64 {
    60 * 60 * 8
}

fn default_episode_revalidate_secs() -> u64 {
    60 * 60 * 24
}

fn default_episode_cache_capacity() -> usize {
    256
}

fn default_display() -> DisplaySettings {
    DisplaySettings {
        locale: Locale::default(),
        site_name: default_site_name(),
        theme_color: default_theme_color(),
    }
}

fn default_site_name() -> String {
    "Podcastr".to_string()
}

fn default_theme_color() -> String {
    "#fff".to_string()
}

fn default_assets() -> AssetSettings {
    AssetSettings {
        public_dir: default_public_dir(),
        pkg_dir: default_pkg_dir(),
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

fn default_pkg_dir() -> PathBuf {
    PathBuf::from("./pkg")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            api: default_api(),
            pages: default_pages(),
            display: default_display(),
            assets: default_assets(),
        }
    }
}
