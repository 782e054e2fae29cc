mod error;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use wardrobe_core::config::WardrobeConfig;
use wardrobe_core::session::SessionStore;
use wardrobe_core::weather::WeatherGateway;

pub struct AppState {
    pub sessions: SessionStore,
    pub weather: WeatherGateway,
    pub config: WardrobeConfig,
}

#[derive(Parser)]
#[command(name = "wardrobe-web", about = "Seasonal Wardrobe HTTP API")]
struct Cli {
    /// Address to bind (overrides web.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides web.port and PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Directory containing .wardrobe/config.toml
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wardrobe_web=info,wardrobe_core=info".into()),
        )
        .init();

    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let mut config = WardrobeConfig::load(Some(&project_dir)).unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {e}");
        WardrobeConfig::default_config()
    });
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    let weather = WeatherGateway::from_config(&config.weather)?;
    if weather.is_mock() {
        tracing::info!("no weather API key configured, serving mock weather data");
    }

    let state = Arc::new(AppState {
        sessions: SessionStore::new(),
        weather,
        config: config.clone(),
    });

    let app = routes::app(state);

    let addr = format!("{}:{}", config.web.host, config.web.port);
    tracing::info!("wardrobe-web listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
