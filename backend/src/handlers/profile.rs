//! HTTP handlers for the farmer profile

use axum::{extract::State, http::StatusCode, Json};
use shared::validation;
use shared::{FarmerProfile, ProfileDraft};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Get the saved profile
pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<FarmerProfile>> {
    state
        .profiles
        .get()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Profile".to_string()))
}

/// Create or replace the profile
pub async fn put_profile(
    State(state): State<AppState>,
    Json(draft): Json<ProfileDraft>,
) -> AppResult<Json<FarmerProfile>> {
    validate_draft(&draft)?;
    let profile = state.profiles.set(draft).await?;
    Ok(Json(profile))
}

/// Delete the profile
pub async fn delete_profile(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.profiles.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_draft(draft: &ProfileDraft) -> AppResult<()> {
    validation::validate_name(&draft.name).map_err(|message| validation_error("name", message))?;
    validation::validate_state(&draft.state)
        .map_err(|message| validation_error("state", message))?;

    if let Some(age) = draft.age {
        validation::validate_age(age).map_err(|message| validation_error("age", message))?;
    }
    if let Some(land_size) = draft.land_size_acres {
        validation::validate_land_size(land_size)
            .map_err(|message| validation_error("land_size_acres", message))?;
    }
    if let Some(income) = draft.annual_income {
        validation::validate_annual_income(income)
            .map_err(|message| validation_error("annual_income", message))?;
    }

    Ok(())
}

fn validation_error(field: &str, message: &str) -> AppError {
    AppError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
