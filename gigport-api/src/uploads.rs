use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const MSG_EMPTY_UPLOAD: &str = "Die hochgeladene Datei ist leer.";

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub filename: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/uploads", post(upload))
}

/// POST /api/uploads
///
/// Raw request body in, opaque locator out. Clients store the locator in
/// the `file` or `image` field of the record it belongs to.
pub async fn upload(
    State(state): State<AppState>,
    _caller: AuthUser,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.is_empty() {
        return Err(ApiError::detail_message(MSG_EMPTY_UPLOAD));
    }

    let filename = query.filename.as_deref().unwrap_or("upload");
    let locator = state.files.put(filename, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "file": locator,
            "url": state.files.url(&locator),
        })),
    ))
}
