use axum::{extract::State, Json};
use std::sync::Arc;
use timetable_core::models::settings::{AppSettings, UpdateSettingsRequest};
use tracing::debug;

use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

/// Stored settings of the user, or the defaults if none were saved yet.
pub async fn load_settings(state: &ApiState, user: &CurrentUser) -> Result<AppSettings, AppError> {
    let settings = state.store.get_settings(user.id()).await?;
    if settings.is_none() {
        debug!("No stored settings for user {}, using defaults", user.id());
    }
    Ok(settings.unwrap_or_default())
}

#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<AppSettings>, AppError> {
    Ok(Json(load_settings(&state, &user).await?))
}

#[axum::debug_handler]
pub async fn update_settings(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<AppSettings>, AppError> {
    let current = load_settings(&state, &user).await?;
    let next = current.apply(&payload)?;

    let saved = state.store.save_settings(user.id(), next).await?;
    Ok(Json(saved))
}
