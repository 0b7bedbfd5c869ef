use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agriguide_backend::services::{MarketService, SchemeService, WeatherService};
use agriguide_backend::store::ProfileStore;
use agriguide_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agriguide_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgriGuide Farmer Assistance Server");
    tracing::info!("Environment: {}", config.environment);

    // Open profile storage
    let profiles = ProfileStore::open(&config.storage.profile_path);

    // Start long-lived services
    let market = MarketService::new();
    market.spawn_price_updates();

    let weather = WeatherService::new(&config.weather, &profiles);
    let schemes = SchemeService::new(profiles.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        profiles,
        schemes,
        weather,
        market,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
