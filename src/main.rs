use std::env;
use std::net::SocketAddr;

use nursery_fees::api::{AppState, create_router};
use nursery_fees::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/little_lodge";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("NURSERY_FEES_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr: SocketAddr = env::var("NURSERY_FEES_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    info!(config_dir = %config_dir, "Loading fee configuration");
    let config = ConfigLoader::load(&config_dir)?;
    let schedule = config.current_schedule()?;
    info!(
        nursery = %config.nursery().name,
        effective_date = %schedule.effective_date,
        hourly_rate = %schedule.hourly_rate,
        "Fee schedule loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
