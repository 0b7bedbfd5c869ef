//! HTTP handlers for market prices

use axum::{
    extract::{Path, State},
    Json,
};
use shared::CropPrice;

use crate::error::AppResult;
use crate::AppState;

/// Current price board
pub async fn list_prices(State(state): State<AppState>) -> Json<Vec<CropPrice>> {
    Json(state.market.prices().await)
}

/// Price detail for one crop
pub async fn get_price(
    State(state): State<AppState>,
    Path(crop): Path<String>,
) -> AppResult<Json<CropPrice>> {
    let price = state.market.price(&crop).await?;
    Ok(Json(price))
}
