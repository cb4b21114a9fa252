use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::BoxError;

/// A customer's rating of a business user. At most one review exists per
/// (reviewer, business_user) pair, enforced by the store.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: Uuid,
    pub reviewer: Uuid,
    pub business_user: Uuid,
    pub rating: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub id: Uuid,
    pub reviewer: Uuid,
    pub business_user: Uuid,
    pub rating: i32,
    pub description: String,
}

/// Partial review update; only the reviewer-editable fields.
#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub rating: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewFilters {
    pub business_user_id: Option<Uuid>,
    pub reviewer_id: Option<Uuid>,
}

/// Sort order for review listings. Unknown or absent tokens fall back to
/// most-recently-updated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOrdering {
    UpdatedAtAsc,
    UpdatedAtDesc,
    RatingAsc,
    RatingDesc,
}

impl ReviewOrdering {
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("updated_at") => ReviewOrdering::UpdatedAtAsc,
            Some("rating") => ReviewOrdering::RatingAsc,
            Some("-rating") => ReviewOrdering::RatingDesc,
            _ => ReviewOrdering::UpdatedAtDesc,
        }
    }
}

/// Repository trait for reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &NewReview) -> Result<Review, BoxError>;

    async fn get(&self, id: Uuid) -> Result<Option<Review>, BoxError>;

    async fn list(&self, filters: ReviewFilters, ordering: ReviewOrdering) -> Result<Vec<Review>, BoxError>;

    /// Applies the update and bumps `updated_at`. `None` for unknown ids.
    async fn update(&self, id: Uuid, update: &ReviewUpdate) -> Result<Option<Review>, BoxError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError>;

    async fn exists_for_pair(&self, reviewer: Uuid, business_user: Uuid) -> Result<bool, BoxError>;

    async fn count(&self) -> Result<i64, BoxError>;

    async fn average_rating(&self) -> Result<Option<f64>, BoxError>;
}
