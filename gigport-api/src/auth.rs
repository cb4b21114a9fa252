use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gigport_core::{FieldErrors, NewUser, ProfileType};

use crate::error::ApiError;
use crate::middleware::auth::issue_token;
use crate::state::AppState;

const MSG_FIELD_REQUIRED: &str = "Dieses Feld darf nicht leer sein.";
const MSG_EMAIL_INVALID: &str = "Gib eine gültige E-Mail-Adresse an.";
const MSG_TYPE_INVALID: &str = "Der Profiltyp muss 'business' oder 'customer' sein.";
const MSG_PASSWORD_MISMATCH: &str = "Passwörter stimmt nicht überein.";
const MSG_ALREADY_TAKEN: &str = "Benutzername oder E-Mail existiert bereits.";
const MSG_BAD_CREDENTIALS: &str = "Falscher Benutzername oder falsches Passwort.";

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub repeated_password: Option<String>,
    #[serde(rename = "type")]
    pub profile_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub email: String,
    pub user_id: Uuid,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/registration", post(register))
        .route("/api/login", post(login))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/registration
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegistrationRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let mut errors = FieldErrors::new();

    let username = req.username.unwrap_or_default();
    if username.trim().is_empty() {
        errors.push("username", MSG_FIELD_REQUIRED);
    }

    let email = req.email.unwrap_or_default();
    if email.trim().is_empty() {
        errors.push("email", MSG_FIELD_REQUIRED);
    } else if !email.contains('@') {
        errors.push("email", MSG_EMAIL_INVALID);
    }

    let password = req.password.unwrap_or_default();
    if password.is_empty() {
        errors.push("password", MSG_FIELD_REQUIRED);
    }

    let profile_type = match req.profile_type.as_deref() {
        Some("business") => Some(ProfileType::Business),
        Some("customer") => Some(ProfileType::Customer),
        _ => {
            errors.push("type", MSG_TYPE_INVALID);
            None
        }
    };

    errors.into_result().map_err(ApiError::field_errors)?;
    let profile_type = profile_type.ok_or_else(|| ApiError::detail_message(MSG_TYPE_INVALID))?;

    if password != req.repeated_password.unwrap_or_default() {
        return Err(ApiError::detail_message(MSG_PASSWORD_MISMATCH));
    }

    if state
        .profiles
        .username_or_email_exists(&username, &email)
        .await?
    {
        return Err(ApiError::detail_message(MSG_ALREADY_TAKEN));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| ApiError::Anyhow(anyhow::anyhow!("password hashing failed: {err}")))?
        .to_string();

    let record = state
        .profiles
        .create_user(&NewUser {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            profile_type,
        })
        .await?;

    let token = issue_token(record.user_id, &record.username, record.is_staff, &state.auth)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            username: record.username,
            email: record.email,
            user_id: record.user_id,
        }),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Some(account) = state.profiles.find_auth_by_username(&req.username).await? else {
        return Err(ApiError::detail_message(MSG_BAD_CREDENTIALS));
    };

    let parsed = PasswordHash::new(&account.password_hash)
        .map_err(|err| ApiError::Anyhow(anyhow::anyhow!("stored password hash invalid: {err}")))?;
    if Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed)
        .is_err()
    {
        return Err(ApiError::detail_message(MSG_BAD_CREDENTIALS));
    }

    let token = issue_token(account.user_id, &account.username, account.is_staff, &state.auth)?;

    Ok(Json(AuthResponse {
        token,
        username: account.username,
        email: account.email,
        user_id: account.user_id,
    }))
}
