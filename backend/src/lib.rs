//! AgriGuide Farmer Assistance Platform - Backend Server
//!
//! Scheme eligibility, weather monitoring, market prices, and crop
//! planning services for Indian farmers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;

use services::{MarketService, SchemeService, WeatherService};
use store::ProfileStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub profiles: ProfileStore,
    pub schemes: SchemeService,
    pub weather: WeatherService,
    pub market: MarketService,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriGuide Farmer Assistance API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
