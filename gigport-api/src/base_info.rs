use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use gigport_core::ProfileType;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/base-info", get(base_info))
}

/// GET /api/base-info
///
/// Public platform statistics. The average rating is rounded to one
/// decimal place and reported as 0.0 while no reviews exist.
pub async fn base_info(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let review_count = state.reviews.count().await?;
    let average_rating = state
        .reviews
        .average_rating()
        .await?
        .map(|avg| (avg * 10.0).round() / 10.0)
        .unwrap_or(0.0);
    let business_profile_count = state.profiles.count_by_type(ProfileType::Business).await?;
    let offer_count = state.offers.count().await?;

    Ok(Json(json!({
        "review_count": review_count,
        "average_rating": average_rating,
        "business_profile_count": business_profile_count,
        "offer_count": offer_count,
    })))
}
