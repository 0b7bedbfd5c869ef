//! Route definitions for the AgriGuide Farmer Assistance Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Farmer profile
        .nest("/profile", profile_routes())
        // Scheme catalog and eligibility
        .nest("/schemes", scheme_routes())
        // Weather widget
        .nest("/weather", weather_routes())
        // Market prices
        .nest("/market", market_routes())
        // Crop calendar
        .route("/calendar", get(handlers::get_calendar))
}

/// Farmer profile routes
fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::get_profile)
            .put(handlers::put_profile)
            .delete(handlers::delete_profile),
    )
}

/// Scheme catalog routes
fn scheme_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_schemes))
        .route("/eligible", get(handlers::list_eligible_schemes))
        .route("/eligibility", get(handlers::get_eligibility))
}

/// Weather widget routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_widget))
        .route("/location", post(handlers::post_location))
        .route("/location/denied", post(handlers::post_location_denied))
        .route("/dismiss", post(handlers::post_dismiss))
        .route("/toggle", post(handlers::post_toggle))
}

/// Market price routes
fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/prices", get(handlers::list_prices))
        .route("/prices/:crop", get(handlers::get_price))
}
