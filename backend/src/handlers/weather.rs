//! HTTP handlers for the weather widget
//!
//! The widget state lives in the weather driver. GET returns the current
//! view; the POST endpoints feed frontend events into the machine and
//! return the view after the transition.

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::types::GpsCoordinates;
use shared::WeatherEvent;

use crate::services::weather::WidgetView;
use crate::AppState;

/// Current widget view
pub async fn get_widget(State(state): State<AppState>) -> Json<WidgetView> {
    Json(state.weather.view().await)
}

/// Device coordinates as resolved by the frontend
#[derive(Debug, Deserialize)]
pub struct CoordinatesInput {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Report the resolved device position
pub async fn post_location(
    State(state): State<AppState>,
    Json(input): Json<CoordinatesInput>,
) -> Json<WidgetView> {
    let coords = GpsCoordinates::new(input.latitude, input.longitude);
    state
        .weather
        .dispatch(WeatherEvent::GeolocationResolved(coords))
        .await;
    Json(state.weather.view().await)
}

/// Report that geolocation was denied or unavailable
pub async fn post_location_denied(State(state): State<AppState>) -> Json<WidgetView> {
    state.weather.dispatch(WeatherEvent::GeolocationDenied).await;
    Json(state.weather.view().await)
}

/// Dismiss the error surface, extending its hold
pub async fn post_dismiss(State(state): State<AppState>) -> Json<WidgetView> {
    state.weather.dispatch(WeatherEvent::ErrorDismissed).await;
    Json(state.weather.view().await)
}

/// Expand or collapse the widget
pub async fn post_toggle(State(state): State<AppState>) -> Json<WidgetView> {
    state.weather.dispatch(WeatherEvent::ToggleExpanded).await;
    Json(state.weather.view().await)
}
