use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use gigport_core::{FieldErrors, NewReview, Review, ReviewFilters, ReviewOrdering, ReviewUpdate};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const MSG_REVIEW_NOT_FOUND: &str = "Die Bewertung wurde nicht gefunden.";
const MSG_USER_NOT_FOUND: &str = "Der angegebene Nutzer existiert nicht.";
const MSG_CUSTOMER_ONLY: &str = "Nur Kunden haben Zugriff auf diese Funktion.";
const MSG_ALREADY_REVIEWED: &str = "Du hast diesen Nutzer bereits bewertet.";
const MSG_RATING_RANGE: &str = "Die Bewertung muss zwischen 1 und 5 liegen.";
const MSG_EDIT_FORBIDDEN: &str = "Nur der Verfasser oder ein Admin darf diese Bewertung bearbeiten.";
const MSG_DELETE_FORBIDDEN: &str = "Nur der Verfasser oder ein Admin darf diese Bewertung löschen.";

#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    pub business_user_id: Option<Uuid>,
    pub reviewer_id: Option<Uuid>,
    pub ordering: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub business_user: Uuid,
    pub rating: i32,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewPatch {
    pub rating: Option<i32>,
    pub description: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/reviews", get(list_reviews).post(create_review))
        .route(
            "/api/reviews/{id}",
            get(get_review).patch(patch_review).delete(delete_review),
        )
}

fn valid_rating(rating: i32) -> bool {
    (1..=5).contains(&rating)
}

/// GET /api/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    _caller: AuthUser,
    Query(query): Query<ListReviewsQuery>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let filters = ReviewFilters {
        business_user_id: query.business_user_id,
        reviewer_id: query.reviewer_id,
    };
    let ordering = ReviewOrdering::parse(query.ordering.as_deref());
    let reviews = state.reviews.list(filters, ordering).await?;
    Ok(Json(reviews))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let profile = state
        .profiles
        .get(caller.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_USER_NOT_FOUND.to_owned()))?;
    if !profile.is_customer() {
        return Err(ApiError::Forbidden(MSG_CUSTOMER_ONLY.to_owned()));
    }

    if !valid_rating(req.rating) {
        let mut errors = FieldErrors::new();
        errors.push("rating", MSG_RATING_RANGE);
        return Err(ApiError::field_errors(errors));
    }

    if !state.profiles.user_exists(req.business_user).await? {
        return Err(ApiError::NotFound(MSG_USER_NOT_FOUND.to_owned()));
    }

    if state
        .reviews
        .exists_for_pair(caller.id, req.business_user)
        .await?
    {
        return Err(ApiError::detail_message(MSG_ALREADY_REVIEWED));
    }

    let review = state
        .reviews
        .create(&NewReview {
            id: Uuid::new_v4(),
            reviewer: caller.id,
            business_user: req.business_user,
            rating: req.rating,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .reviews
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_REVIEW_NOT_FOUND.to_owned()))?;
    Ok(Json(review))
}

/// PATCH /api/reviews/{id}
pub async fn patch_review(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ReviewPatch>,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .reviews
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_REVIEW_NOT_FOUND.to_owned()))?;

    if review.reviewer != caller.id && !caller.is_staff {
        return Err(ApiError::Forbidden(MSG_EDIT_FORBIDDEN.to_owned()));
    }

    if matches!(body.rating, Some(rating) if !valid_rating(rating)) {
        let mut errors = FieldErrors::new();
        errors.push("rating", MSG_RATING_RANGE);
        return Err(ApiError::field_errors(errors));
    }

    let updated = state
        .reviews
        .update(
            review.id,
            &ReviewUpdate {
                rating: body.rating,
                description: body.description,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_REVIEW_NOT_FOUND.to_owned()))?;

    Ok(Json(updated))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let review = state
        .reviews
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(MSG_REVIEW_NOT_FOUND.to_owned()))?;

    if review.reviewer != caller.id && !caller.is_staff {
        return Err(ApiError::Forbidden(MSG_DELETE_FORBIDDEN.to_owned()));
    }

    state.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
