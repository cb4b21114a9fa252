use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, AuthConfig};

const MSG_MISSING_CREDENTIALS: &str = "Anmeldedaten fehlen.";
const MSG_INVALID_TOKEN: &str = "Ungültiger oder abgelaufener Token.";

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub is_staff: bool,
    pub exp: usize,
}

/// The verified caller, pulled out of the Bearer token by the extractor.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub is_staff: bool,
}

// ============================================================================
// Token issuing / verification
// ============================================================================

pub fn issue_token(
    user_id: Uuid,
    username: &str,
    is_staff: bool,
    auth: &AuthConfig,
) -> Result<String, ApiError> {
    let expires = Utc::now() + Duration::seconds(auth.expiration_seconds as i64);
    let claims = Claims {
        sub: user_id,
        username: username.to_owned(),
        is_staff,
        exp: expires.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
    .map_err(|err| ApiError::Anyhow(anyhow::anyhow!("failed to sign token: {err}")))
}

pub fn verify_token(token: &str, auth: &AuthConfig) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized(MSG_INVALID_TOKEN.to_owned()))
}

// ============================================================================
// Extractor
// ============================================================================

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized(MSG_MISSING_CREDENTIALS.to_owned()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized(MSG_MISSING_CREDENTIALS.to_owned()))?;

        let claims = verify_token(token, &state.auth)?;

        Ok(AuthUser {
            id: claims.sub,
            username: claims.username,
            is_staff: claims.is_staff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            secret: "test-secret".to_owned(),
            expiration_seconds: 3600,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let auth = test_config();
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, "anna", true, &auth).unwrap();
        let claims = verify_token(&token, &auth).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "anna");
        assert!(claims.is_staff);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let auth = test_config();
        let token = issue_token(Uuid::new_v4(), "anna", false, &auth).unwrap();
        let other = AuthConfig {
            secret: "other-secret".to_owned(),
            expiration_seconds: 3600,
        };
        assert!(verify_token(&token, &other).is_err());
    }
}
