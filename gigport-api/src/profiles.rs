use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use gigport_core::{ProfileRecord, ProfileType, ProfileUpdate};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const MSG_PROFILE_NOT_FOUND: &str = "Das Profil wurde nicht gefunden.";
const MSG_EDIT_FORBIDDEN: &str = "Dir fehlt die Berechtigung, dieses Profil zu bearbeiten.";
const MSG_INVALID_VALUE: &str = "Der eingegebene Wert ist ungültig.";

/// Every key a profile PATCH may carry; anything else is rejected by name.
const PATCHABLE_FIELDS: &[&str] = &[
    "username",
    "first_name",
    "last_name",
    "email",
    "location",
    "description",
    "working_hours",
    "tel",
    "file",
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/profile/{user_id}", get(get_profile).patch(patch_profile))
        .route("/api/profiles/business", get(list_business_profiles))
        .route("/api/profiles/customer", get(list_customer_profiles))
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub tel: String,
    pub location: String,
    pub description: String,
    pub file: Option<String>,
    pub working_hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BusinessProfileItem {
    pub user: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub tel: String,
    pub location: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub file: Option<String>,
    pub description: String,
    pub working_hours: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerProfileItem {
    pub user: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub file: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

fn file_url(state: &AppState, file: &Option<String>) -> Option<String> {
    file.as_ref().map(|locator| state.files.url(locator))
}

fn profile_response(
    state: &AppState,
    record: ProfileRecord,
    with_uploaded_at: bool,
) -> ProfileResponse {
    ProfileResponse {
        user: record.user_id,
        username: record.username,
        first_name: record.first_name,
        last_name: record.last_name,
        email: record.email,
        profile_type: record.profile_type,
        tel: record.tel,
        location: record.location,
        description: record.description,
        file: file_url(state, &record.file),
        working_hours: record.working_hours,
        uploaded_at: if with_uploaded_at { record.uploaded_at } else { None },
        created_at: record.created_at,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/profile/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let record = state
        .profiles
        .get(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_PROFILE_NOT_FOUND.to_owned()))?;
    Ok(Json(profile_response(&state, record, false)))
}

/// PATCH /api/profile/{user_id}
pub async fn patch_profile(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<ProfileResponse>, ApiError> {
    if user_id != caller.id {
        return Err(ApiError::Forbidden(MSG_EDIT_FORBIDDEN.to_owned()));
    }

    let rejected: Vec<&str> = body
        .keys()
        .map(String::as_str)
        .filter(|key| !PATCHABLE_FIELDS.contains(key))
        .collect();
    if let Some(field) = rejected.first() {
        return Err(ApiError::detail_message(format!(
            "Das Feld {field} ist nicht erlaubt."
        )));
    }

    let update: ProfileUpdate = serde_json::from_value(Value::Object(body))
        .map_err(|_| ApiError::detail_message(MSG_INVALID_VALUE))?;

    let record = state
        .profiles
        .update(user_id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_PROFILE_NOT_FOUND.to_owned()))?;

    Ok(Json(profile_response(&state, record, true)))
}

/// GET /api/profiles/business
pub async fn list_business_profiles(
    State(state): State<AppState>,
    _caller: AuthUser,
) -> Result<Json<Vec<BusinessProfileItem>>, ApiError> {
    let records = state.profiles.list_by_type(ProfileType::Business).await?;
    let items = records
        .into_iter()
        .map(|record| BusinessProfileItem {
            user: record.user_id,
            username: record.username,
            first_name: record.first_name,
            last_name: record.last_name,
            tel: record.tel,
            location: record.location,
            profile_type: record.profile_type,
            file: record.file.as_ref().map(|locator| state.files.url(locator)),
            description: record.description,
            working_hours: record.working_hours,
        })
        .collect();
    Ok(Json(items))
}

/// GET /api/profiles/customer
pub async fn list_customer_profiles(
    State(state): State<AppState>,
    _caller: AuthUser,
) -> Result<Json<Vec<CustomerProfileItem>>, ApiError> {
    let records = state.profiles.list_by_type(ProfileType::Customer).await?;
    let items = records
        .into_iter()
        .map(|record| CustomerProfileItem {
            user: record.user_id,
            username: record.username,
            first_name: record.first_name,
            last_name: record.last_name,
            profile_type: record.profile_type,
            file: record.file.as_ref().map(|locator| state.files.url(locator)),
            uploaded_at: record.uploaded_at,
        })
        .collect();
    Ok(Json(items))
}
