use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use timetable_core::{
    errors::TimetableError,
    models::class_entry::{
        ClassEntry, ClearTimetableResponse, CreateClassesRequest, CreateClassesResponse,
        GetTimetableResponse, UpdateClassRequest,
    },
    timetable::Timetable,
    validation,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

fn class_not_found(id: Uuid) -> AppError {
    AppError(TimetableError::NotFound(format!("Class with ID {} not found", id)))
}

#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<GetTimetableResponse>, AppError> {
    let entries = state.store.list_classes(user.id()).await?;

    Ok(Json(Timetable::from_entries(entries).into()))
}

#[axum::debug_handler]
pub async fn create_classes(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Json(payload): Json<CreateClassesRequest>,
) -> Result<(StatusCode, Json<CreateClassesResponse>), AppError> {
    validation::validate_create(&payload)?;

    // One entry per selected day, stored together
    let created = state
        .store
        .create_classes(user.id(), payload.into_entries())
        .await?;

    info!("Added {} class entries for user {}", created.len(), user.id());
    Ok((StatusCode::CREATED, Json(CreateClassesResponse { created })))
}

#[axum::debug_handler]
pub async fn update_class(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClassRequest>,
) -> Result<Json<ClassEntry>, AppError> {
    validation::validate_update(&payload)?;

    let existing = state
        .store
        .get_class(user.id(), id)
        .await?
        .ok_or_else(|| class_not_found(id))?;

    let updated = state
        .store
        .update_class(user.id(), payload.apply_to(&existing))
        .await?
        .ok_or_else(|| class_not_found(id))?;

    info!("Updated class entry {} for user {}", id, user.id());
    Ok(Json(updated))
}

#[axum::debug_handler]
pub async fn delete_class(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_class(user.id(), id).await? {
        return Err(class_not_found(id));
    }

    info!("Deleted class entry {} for user {}", id, user.id());
    Ok(StatusCode::NO_CONTENT)
}

/// Drops the whole timetable, as done when a user signs out.
#[axum::debug_handler]
pub async fn clear_classes(
    State(state): State<Arc<ApiState>>,
    user: CurrentUser,
) -> Result<Json<ClearTimetableResponse>, AppError> {
    let removed = state.store.clear_classes(user.id()).await?;

    info!("Cleared {} class entries for user {}", removed, user.id());
    Ok(Json(ClearTimetableResponse { removed }))
}
