//! WebAssembly module for AgriGuide Farmer Assistance Platform
//!
//! Provides client-side computation for:
//! - Offline scheme eligibility evaluation
//! - City name normalization
//! - Profile field validation
//! - Display helpers for prices and weather conditions

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Evaluate a profile against one scheme's criteria
#[wasm_bindgen]
pub fn evaluate_scheme_eligibility(
    profile_json: &str,
    criteria_json: &str,
) -> Result<String, JsValue> {
    let profile: FarmerProfile = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))?;
    let criteria: EligibilityCriteria = serde_json::from_str(criteria_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid criteria JSON: {}", e)))?;

    let result = shared::eligibility::evaluate(Some(&profile), &criteria);
    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Evaluate a profile against the whole scheme catalog.
///
/// Accepts `null` for a missing profile, which makes every scheme
/// ineligible.
#[wasm_bindgen]
pub fn evaluate_scheme_catalog(profile_json: &str) -> Result<String, JsValue> {
    let profile: Option<FarmerProfile> = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))?;

    let results: Vec<serde_json::Value> = shared::catalog::scheme_catalog()
        .iter()
        .map(|scheme| {
            let result = shared::eligibility::evaluate(profile.as_ref(), &scheme.criteria);
            serde_json::json!({
                "scheme_id": scheme.id,
                "scheme_name": scheme.name,
                "eligibility": result,
            })
        })
        .collect();

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize results: {}", e)))
}

/// Normalize a free-text city name for weather lookups
#[wasm_bindgen]
pub fn normalize_city_name(raw: &str) -> String {
    shared::location::normalize(raw)
}

/// Check whether a state is a recognized Indian state or union territory
#[wasm_bindgen]
pub fn is_valid_indian_state(state: &str) -> bool {
    validate_state(state).is_ok()
}

/// Check whether a crop is covered by assistance programmes
#[wasm_bindgen]
pub fn is_covered_crop(crop: &str) -> bool {
    is_assisted_crop(crop)
}

/// Trend label implied by a price movement
#[wasm_bindgen]
pub fn price_trend_label(previous: f64, current: f64) -> String {
    let previous = Decimal::try_from(previous).unwrap_or(Decimal::ZERO);
    let current = Decimal::try_from(current).unwrap_or(Decimal::ZERO);

    format!("{}", PriceTrend::from_change(current - previous))
}

/// Display label for a provider weather condition group
#[wasm_bindgen]
pub fn weather_condition_label(condition_group: &str) -> String {
    format!("{}", WeatherCondition::from_provider(condition_group))
}
