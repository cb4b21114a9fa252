use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use gigport_core::BoxError;
use gigport_offer::{Offer, OfferDetail, OfferRepository};

pub struct PgOfferRepository {
    pub pool: PgPool,
}

impl PgOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OfferRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct DetailRow {
    id: Uuid,
    offer_id: Uuid,
    offer_type: String,
    title: String,
    price: Decimal,
    delivery_time_in_days: i32,
    revisions: i32,
    features: serde_json::Value,
}

impl OfferRow {
    fn into_offer(self, details: Vec<OfferDetail>) -> Offer {
        Offer {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
            details,
        }
    }
}

impl DetailRow {
    fn into_detail(self) -> Result<OfferDetail, BoxError> {
        Ok(OfferDetail {
            id: self.id,
            offer_id: self.offer_id,
            offer_type: self.offer_type.parse().map_err(BoxError::from)?,
            title: self.title,
            price: self.price,
            delivery_time_in_days: self.delivery_time_in_days,
            revisions: self.revisions,
            features: serde_json::from_value(self.features)?,
        })
    }
}

const DETAIL_COLUMNS: &str =
    "id, offer_id, offer_type, title, price, delivery_time_in_days, revisions, features";

#[async_trait]
impl OfferRepository for PgOfferRepository {
    async fn create(&self, offer: &Offer) -> Result<(), BoxError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO offers (id, user_id, title, description, image, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(offer.id)
        .bind(offer.user_id)
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.image)
        .bind(offer.created_at)
        .bind(offer.updated_at)
        .execute(&mut *tx)
        .await?;

        for (position, detail) in offer.details.iter().enumerate() {
            sqlx::query(
                "INSERT INTO offer_details
                     (id, offer_id, position, offer_type, title, price, delivery_time_in_days, revisions, features)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(detail.id)
            .bind(offer.id)
            .bind(position as i32)
            .bind(detail.offer_type.as_str())
            .bind(&detail.title)
            // Prices persist with exactly two fractional digits.
            .bind(detail.price.round_dp(2))
            .bind(detail.delivery_time_in_days)
            .bind(detail.revisions)
            .bind(serde_json::to_value(&detail.features)?)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Offer>, BoxError> {
        let offer_row = sqlx::query_as::<_, OfferRow>(
            "SELECT id, user_id, title, description, image, created_at, updated_at
             FROM offers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(offer_row) = offer_row else {
            return Ok(None);
        };

        let detail_rows = sqlx::query_as::<_, DetailRow>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM offer_details WHERE offer_id = $1 ORDER BY position",
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let details = detail_rows
            .into_iter()
            .map(DetailRow::into_detail)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(offer_row.into_offer(details)))
    }

    async fn list(&self) -> Result<Vec<Offer>, BoxError> {
        let offer_rows = sqlx::query_as::<_, OfferRow>(
            "SELECT id, user_id, title, description, image, created_at, updated_at
             FROM offers",
        )
        .fetch_all(&self.pool)
        .await?;

        let detail_rows = sqlx::query_as::<_, DetailRow>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM offer_details ORDER BY offer_id, position",
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut by_offer: HashMap<Uuid, Vec<OfferDetail>> = HashMap::new();
        for row in detail_rows {
            let detail = row.into_detail()?;
            by_offer.entry(detail.offer_id).or_default().push(detail);
        }

        Ok(offer_rows
            .into_iter()
            .map(|row| {
                let details = by_offer.remove(&row.id).unwrap_or_default();
                row.into_offer(details)
            })
            .collect())
    }

    async fn update(&self, offer: &Offer) -> Result<(), BoxError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE offers SET title = $2, description = $3, image = $4, updated_at = $5
             WHERE id = $1",
        )
        .bind(offer.id)
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.image)
        .bind(offer.updated_at)
        .execute(&mut *tx)
        .await?;

        for detail in &offer.details {
            // Scoped to the owning offer so a stray id can never reach
            // another offer's tier.
            sqlx::query(
                "UPDATE offer_details
                 SET offer_type = $3, title = $4, price = $5, delivery_time_in_days = $6,
                     revisions = $7, features = $8
                 WHERE id = $1 AND offer_id = $2",
            )
            .bind(detail.id)
            .bind(offer.id)
            .bind(detail.offer_type.as_str())
            .bind(&detail.title)
            .bind(detail.price.round_dp(2))
            .bind(detail.delivery_time_in_days)
            .bind(detail.revisions)
            .bind(serde_json::to_value(&detail.features)?)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_detail(&self, id: Uuid) -> Result<Option<(OfferDetail, Uuid)>, BoxError> {
        #[derive(sqlx::FromRow)]
        struct DetailWithOwnerRow {
            #[sqlx(flatten)]
            detail: DetailRow,
            owner_id: Uuid,
        }

        let row = sqlx::query_as::<_, DetailWithOwnerRow>(
            "SELECT d.id, d.offer_id, d.offer_type, d.title, d.price,
                    d.delivery_time_in_days, d.revisions, d.features,
                    o.user_id AS owner_id
             FROM offer_details d
             JOIN offers o ON o.id = d.offer_id
             WHERE d.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let owner = row.owner_id;
                Ok(Some((row.detail.into_detail()?, owner)))
            }
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<i64, BoxError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM offers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
