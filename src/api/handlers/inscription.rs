use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateInscriptionRequest;
use crate::domain::models::inscription::{Inscription, Participant};
use crate::domain::services::lifecycle;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_inscription(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateInscriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_id(&payload.user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let event = state.event_repo.find_by_id(&payload.event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let participant = if payload.for_another_one {
        let details = payload.participants.as_ref();
        let mut missing = Vec::new();
        if details.and_then(|p| p.name.as_deref()).map_or(true, str::is_empty) { missing.push("name"); }
        if details.and_then(|p| p.email.as_deref()).map_or(true, str::is_empty) { missing.push("email"); }
        if details.map_or(true, |p| p.date_of_birth.is_none()) { missing.push("dateOfBirth"); }
        if details.and_then(|p| p.document.as_deref()).map_or(true, str::is_empty) { missing.push("document"); }

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required participant fields: {}",
                missing.join(", ")
            )));
        }

        let details = details.ok_or(AppError::Internal)?;
        Participant {
            name: details.name.clone().ok_or(AppError::Internal)?,
            email: details.email.clone().ok_or(AppError::Internal)?,
            date_of_birth: details.date_of_birth.ok_or(AppError::Internal)?,
            document: details.document.clone().ok_or(AppError::Internal)?,
        }
    } else {
        // Self registration: the participant is the registrant's own profile.
        Participant {
            name: user.full_name(),
            email: user.email.clone(),
            date_of_birth: user.date_of_birth,
            document: user.cpf.clone(),
        }
    };

    if state.inscription_repo.find_active_by_document(&event.id, &participant.document).await?.is_some() {
        return Err(AppError::Conflict("This person is already registered for this event.".into()));
    }

    let inscription = Inscription::new(user.id, event.id, payload.for_another_one, participant);
    let created = state.inscription_repo.create(&inscription).await?;

    info!("Inscription created: {} for event {}", created.id, created.event_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_inscriptions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let inscriptions = state.inscription_repo.list().await?;
    Ok(Json(inscriptions))
}

pub async fn get_inscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let inscription = state.inscription_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Inscription not found".into()))?;
    Ok(Json(inscription))
}

pub async fn cancel_inscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut inscription = state.inscription_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Inscription not found".into()))?;

    lifecycle::cancel(&mut inscription)?;

    let updated = state.inscription_repo.update(&inscription).await?;
    info!("Inscription cancelled: {}", updated.id);
    Ok(Json(updated))
}
