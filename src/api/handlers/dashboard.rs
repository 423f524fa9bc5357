use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::services::dashboard::summarize_event;
use crate::error::AppError;
use std::sync::Arc;

pub async fn event_dashboard(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let events = state.event_repo.list_by_owner(&user_id).await?;

    if events.is_empty() {
        // Owning no events is an empty result, not an error.
        return Ok(Json(serde_json::json!({
            "message": "No events found created by this user.",
            "dashboardData": []
        })));
    }

    let mut dashboard_data = Vec::with_capacity(events.len());
    for event in &events {
        let inscriptions = state.inscription_repo.list_by_event(&event.id).await?;
        dashboard_data.push(summarize_event(event, &inscriptions));
    }

    Ok(Json(serde_json::json!({ "dashboardData": dashboard_data })))
}
