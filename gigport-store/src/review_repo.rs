use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use gigport_core::{
    BoxError, NewReview, Review, ReviewFilters, ReviewOrdering, ReviewRepository, ReviewUpdate,
};

pub struct PgReviewRepository {
    pub pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REVIEW_COLUMNS: &str =
    "id, reviewer_id, business_user_id, rating, description, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    reviewer_id: Uuid,
    business_user_id: Uuid,
    rating: i32,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            id: self.id,
            reviewer: self.reviewer_id,
            business_user: self.business_user_id,
            rating: self.rating,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn order_clause(ordering: ReviewOrdering) -> &'static str {
    match ordering {
        ReviewOrdering::UpdatedAtAsc => "updated_at ASC",
        ReviewOrdering::UpdatedAtDesc => "updated_at DESC",
        ReviewOrdering::RatingAsc => "rating ASC",
        ReviewOrdering::RatingDesc => "rating DESC",
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, review: &NewReview) -> Result<Review, BoxError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "INSERT INTO reviews (id, reviewer_id, business_user_id, rating, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(review.id)
        .bind(review.reviewer)
        .bind(review.business_user)
        .bind(review.rating)
        .bind(&review.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into_review())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Review>, BoxError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(ReviewRow::into_review))
    }

    async fn list(&self, filters: ReviewFilters, ordering: ReviewOrdering) -> Result<Vec<Review>, BoxError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews
             WHERE ($1::uuid IS NULL OR business_user_id = $1)
               AND ($2::uuid IS NULL OR reviewer_id = $2)
             ORDER BY {}",
            order_clause(ordering)
        ))
        .bind(filters.business_user_id)
        .bind(filters.reviewer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ReviewRow::into_review).collect())
    }

    async fn update(&self, id: Uuid, update: &ReviewUpdate) -> Result<Option<Review>, BoxError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "UPDATE reviews
             SET rating = COALESCE($2, rating),
                 description = COALESCE($3, description),
                 updated_at = now()
             WHERE id = $1
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(id)
        .bind(update.rating)
        .bind(&update.description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(ReviewRow::into_review))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_for_pair(&self, reviewer: Uuid, business_user: Uuid) -> Result<bool, BoxError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE reviewer_id = $1 AND business_user_id = $2)",
        )
        .bind(reviewer)
        .bind(business_user)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn count(&self) -> Result<i64, BoxError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn average_rating(&self) -> Result<Option<f64>, BoxError> {
        let avg: Option<f64> = sqlx::query_scalar("SELECT AVG(rating)::float8 FROM reviews")
            .fetch_one(&self.pool)
            .await?;
        Ok(avg)
    }
}
