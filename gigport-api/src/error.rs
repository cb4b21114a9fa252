use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use gigport_core::{BoxError, DomainError, FieldErrors};
use gigport_offer::DetailErrors;

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Forbidden(String),
    ForbiddenWithCode { detail: String, code: &'static str },
    Validation(Value),
    NotFound(String),
    Anyhow(anyhow::Error),
}

impl ApiError {
    /// Field-name-to-messages body, as produced by the validators.
    pub fn field_errors(errors: FieldErrors) -> Self {
        Self::Validation(serde_json::to_value(errors).unwrap_or_default())
    }

    /// Per-tier validation failures, keyed under "details".
    pub fn detail_errors(errors: Vec<DetailErrors>) -> Self {
        Self::Validation(json!({ "details": errors }))
    }

    /// Single top-level message in the "detail" list.
    pub fn detail_message(msg: impl Into<String>) -> Self {
        Self::Validation(json!({ "detail": [msg.into()] }))
    }

    pub fn business_profile_required() -> Self {
        Self::ForbiddenWithCode {
            detail: "Nur Geschäftskunden ist die Erstellung von Angeboten erlaubt.".to_owned(),
            code: "business_profile_required",
        }
    }

    pub fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::field_errors(errors),
            DomainError::Forbidden(msg) => Self::Forbidden(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, json!({ "detail": [msg] }))
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "detail": [msg] })),
            ApiError::ForbiddenWithCode { detail, code } => (
                StatusCode::FORBIDDEN,
                json!({ "detail": [detail], "code": code }),
            ),
            ApiError::Validation(body) => (StatusCode::BAD_REQUEST, body),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "detail": [msg] })),
            ApiError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BoxError> for ApiError {
    fn from(err: BoxError) -> Self {
        Self::Anyhow(anyhow::anyhow!(err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}
