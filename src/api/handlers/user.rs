use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::UpdateUserRequest;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state.user_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(val) = payload.name { user.name = val; }
    if let Some(val) = payload.lastname { user.lastname = val; }
    if let Some(val) = payload.date_of_birth { user.date_of_birth = val; }
    if let Some(val) = payload.phone { user.phone = val; }
    if let Some(val) = payload.email {
        if let Some(existing) = state.user_repo.find_by_email(&val).await? {
            if existing.id != user.id {
                return Err(AppError::Conflict("The field 'email' is already in use.".into()));
            }
        }
        user.email = val;
    }

    let updated = state.user_repo.update(&user).await?;
    info!("User updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.user_repo.delete(&id).await?;
    info!("User deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
