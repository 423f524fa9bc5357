use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, dashboard, event, health, inscription, user};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))

        // Users
        .route("/api/user", get(user::list_users))
        .route("/api/user/{id}", get(user::get_user).patch(user::update_user).delete(user::delete_user))

        // Events
        .route("/api/event", post(event::create_event).get(event::list_events))
        .route("/api/event/created-by/{user_id}", get(event::list_events_created_by))
        .route("/api/event/dashboard/{user_id}", get(dashboard::event_dashboard))
        .route("/api/event/validate-entry/{id}", post(event::validate_entry))
        .route("/api/event/validate-exit/{id}", post(event::validate_exit))
        .route("/api/event/{id}", get(event::get_event).patch(event::update_event).delete(event::delete_event))

        // Inscriptions
        .route("/api/inscription", post(inscription::create_inscription).get(inscription::list_inscriptions))
        .route("/api/inscription/{id}", get(inscription::get_inscription))
        .route("/api/inscription/{id}/cancel", patch(inscription::cancel_inscription))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
