use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateEventRequest, DeleteEventRequest, UpdateEventRequest, ValidateTicketRequest};
use crate::domain::models::event::{Event, Location, NewEventParams, Schedule};
use crate::domain::services::{lifecycle, ownership::ensure_event_owner};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.user_repo.find_by_id(&payload.user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(ref event_type) = payload.event_type {
        if event_type != "standard" {
            return Err(AppError::Validation("Only events of type 'standard' can be created at this time.".into()));
        }
    }

    if payload.schedules.end < payload.schedules.start {
        return Err(AppError::Validation("Schedule end must be after start".into()));
    }
    if payload.capacity.max <= 0 {
        return Err(AppError::Validation("Capacity max must be positive".into()));
    }
    if payload.inscription_price < 0.0 {
        return Err(AppError::Validation("Inscription price cannot be negative".into()));
    }

    let event = Event::new(NewEventParams {
        user_id: payload.user_id,
        name: payload.name,
        description: payload.description,
        categories: payload.categories,
        date: payload.date,
        location: Location {
            address: payload.location.address,
            city: payload.location.city,
            state: payload.location.state,
            country: payload.location.country,
            additional_info: payload.location.additional_info,
        },
        capacity_max: payload.capacity.max,
        schedule: Schedule {
            start: payload.schedules.start,
            end: payload.schedules.end,
        },
        inscription_price: payload.inscription_price,
    });

    let created = state.event_repo.create(&event).await?;
    info!("Event created: {} by user {}", created.id, created.user_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    ensure_event_owner(&event, &payload.user_id)?;

    if let Some(val) = payload.name { event.name = val; }
    if let Some(val) = payload.description { event.description = val; }
    if let Some(val) = payload.categories { event.categories = sqlx::types::Json(val); }
    if let Some(val) = payload.date { event.date = val; }
    if let Some(val) = payload.location {
        event.location = Location {
            address: val.address,
            city: val.city,
            state: val.state,
            country: val.country,
            additional_info: val.additional_info,
        };
    }
    if let Some(val) = payload.capacity {
        if val.max <= 0 {
            return Err(AppError::Validation("Capacity max must be positive".into()));
        }
        event.capacity.max = val.max;
    }
    if let Some(val) = payload.schedules {
        if val.end < val.start {
            return Err(AppError::Validation("Schedule end must be after start".into()));
        }
        event.schedule = Schedule { start: val.start, end: val.end };
    }
    if let Some(val) = payload.inscription_price {
        if val < 0.0 {
            return Err(AppError::Validation("Inscription price cannot be negative".into()));
        }
        event.inscription_price = val;
    }

    let updated = state.event_repo.update(&event).await?;
    info!("Event updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<DeleteEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    ensure_event_owner(&event, &payload.user_id)?;

    state.event_repo.delete(&event.id).await?;
    info!("Event deleted: {}", event.id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn list_events_created_by(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let events = state.event_repo.list_by_owner(&user_id).await?;
    Ok(Json(events))
}

pub async fn validate_entry(
    State(state): State<Arc<AppState>>,
    Path(inscription_id): Path<String>,
    Json(payload): Json<ValidateTicketRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut inscription = state.inscription_repo.find_by_id(&inscription_id).await?
        .ok_or(AppError::NotFound("Ticket not found".into()))?;

    let event = state.event_repo.find_by_id(&inscription.event_id).await?
        .ok_or(AppError::NotFound("Event associated with this ticket not found".into()))?;

    ensure_event_owner(&event, &payload.event_creator_id)?;

    lifecycle::validate_entry(&mut inscription, Utc::now())?;

    let updated = state.inscription_repo.update(&inscription).await?;
    info!("Entry validated for ticket {} at event {}", updated.id, event.id);
    Ok(Json(updated))
}

pub async fn validate_exit(
    State(state): State<Arc<AppState>>,
    Path(inscription_id): Path<String>,
    Json(payload): Json<ValidateTicketRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut inscription = state.inscription_repo.find_by_id(&inscription_id).await?
        .ok_or(AppError::NotFound("Ticket not found".into()))?;

    let event = state.event_repo.find_by_id(&inscription.event_id).await?
        .ok_or(AppError::NotFound("Event associated with this ticket not found".into()))?;

    ensure_event_owner(&event, &payload.event_creator_id)?;

    lifecycle::validate_exit(&mut inscription, Utc::now())?;

    let updated = state.inscription_repo.update(&inscription).await?;
    info!("Exit validated for ticket {} at event {}", updated.id, event.id);
    Ok(Json(updated))
}
