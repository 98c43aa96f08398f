use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use what_to_wear::{server, Config, WearService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "what_to_wear=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting what-to-wear server ({:?} recommender, location {}, {})",
        config.strategy,
        config.location.latitude,
        config.location.longitude
    );

    let service = Arc::new(WearService::new(&config)?);
    let app = server::router(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
