//! HTTP handlers for government schemes and eligibility

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{EligibilityResult, Scheme};

use crate::AppState;

/// A scheme together with its evaluation against the current profile
#[derive(Serialize)]
pub struct SchemeView {
    pub scheme: Scheme,
    pub eligibility: EligibilityResult,
}

/// Eligibility breakdown without the full scheme body
#[derive(Serialize)]
pub struct EligibilityView {
    pub scheme_id: String,
    pub scheme_name: String,
    pub eligibility: EligibilityResult,
}

/// List every scheme with its eligibility for the current profile
pub async fn list_schemes(State(state): State<AppState>) -> Json<Vec<SchemeView>> {
    let schemes = state
        .schemes
        .evaluate_all()
        .await
        .into_iter()
        .map(|(scheme, eligibility)| SchemeView {
            scheme,
            eligibility,
        })
        .collect();

    Json(schemes)
}

/// List only the schemes the current profile qualifies for
pub async fn list_eligible_schemes(State(state): State<AppState>) -> Json<Vec<Scheme>> {
    Json(state.schemes.eligible().await)
}

/// Eligibility breakdown for every scheme
pub async fn get_eligibility(State(state): State<AppState>) -> Json<Vec<EligibilityView>> {
    let breakdown = state
        .schemes
        .evaluate_all()
        .await
        .into_iter()
        .map(|(scheme, eligibility)| EligibilityView {
            scheme_id: scheme.id,
            scheme_name: scheme.name,
            eligibility,
        })
        .collect();

    Json(breakdown)
}
