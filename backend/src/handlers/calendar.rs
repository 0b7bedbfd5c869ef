//! HTTP handlers for the crop calendar

use axum::Json;
use shared::catalog;
use shared::SeasonCalendar;

/// Season calendar with sowing and harvest windows
pub async fn get_calendar() -> Json<Vec<SeasonCalendar>> {
    Json(catalog::crop_calendar())
}
