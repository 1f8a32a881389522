/// Podcastr Server - episode listing pages and browser player
use clap::{Parser, Subcommand};
use podcastr_client::{ClientConfig, PodcastrClient};
use podcastr_server::{config::AppConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr-server")]
#[command(about = "Podcastr episode pages and player", long_about = None)]
struct Cli {
    /// Configuration file path (default: podcastr.toml if present)
    #[arg(short, long, global = true, env = "PODCASTR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the newest episodes from the API
    Episodes {
        /// Number of episodes to fetch
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await?;
        }
        Commands::Episodes { limit } => {
            list_episodes(config, limit).await?;
        }
    }

    Ok(())
}

fn build_client(config: &AppConfig) -> anyhow::Result<PodcastrClient> {
    let client_config = ClientConfig::new(&config.api.base_url).with_timeout(config.api.timeout());
    Ok(PodcastrClient::new(client_config)?)
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Podcastr Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Episode API: {}", config.api.base_url);

    let client = build_client(&config)?;

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let app = create_router(AppState::new(Arc::new(client), config));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_episodes(config: AppConfig, limit: usize) -> anyhow::Result<()> {
    config.validate()?;

    let client = build_client(&config)?;
    let locale = config.display.locale;

    for record in client.list_episodes(limit).await? {
        match record.to_episode(locale) {
            Ok(episode) => println!(
                "{:<10} {:>8}  {}  ({})",
                episode.published_at.unwrap_or_default(),
                episode.duration_as_string.unwrap_or_default(),
                episode.title,
                episode.id
            ),
            Err(e) => tracing::warn!(episode_id = %record.id, "Skipping episode: {}", e),
        }
    }

    Ok(())
}
