use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{LoginRequest, RegisterUserRequest};
use crate::domain::models::user::{NewUserParams, User};
use crate::error::AppError;
use std::sync::Arc;
use argon2::{password_hash::{SaltString, PasswordHasher}, Argon2, PasswordHash, PasswordVerifier};
use rand::rngs::OsRng;
use tracing::info;

const SPECIAL_CHARS: &str = "@$!%*#?&_";

fn check_password_policy(password: &str) -> Result<(), AppError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    if password.len() < 8 || !has_letter || !has_digit || !has_special {
        return Err(AppError::Validation(
            "Password must be at least 8 characters long and contain letters, numbers and special characters.".into(),
        ));
    }
    Ok(())
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let required = [
        ("name", &payload.name),
        ("lastname", &payload.lastname),
        ("cpf", &payload.cpf),
        ("phone", &payload.phone),
        ("email", &payload.email),
    ];
    let missing: Vec<&str> = required.iter().filter(|(_, v)| v.trim().is_empty()).map(|(k, _)| *k).collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!("Missing required fields: {}", missing.join(", "))));
    }

    check_password_policy(&payload.password)?;

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("The field 'email' is already in use.".into()));
    }
    if state.user_repo.find_by_cpf(&payload.cpf).await?.is_some() {
        return Err(AppError::Conflict("The field 'cpf' is already in use.".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let user = User::new(NewUserParams {
        name: payload.name,
        lastname: payload.lastname,
        password_hash,
        date_of_birth: payload.date_of_birth,
        cpf: payload.cpf,
        phone: payload.phone,
        email: payload.email,
    });
    let created = state.user_repo.create(&user).await?;

    info!("Registered user: {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_email(&payload.email).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    info!("User logged in: {}", user.id);

    // No token issuance: the deployment identifies callers by the ids they
    // send, see the ownership guard.
    Ok(Json(serde_json::json!({
        "user": {
            "id": user.id,
            "email": user.email,
            "name": user.name,
            "lastname": user.lastname,
        }
    })))
}
