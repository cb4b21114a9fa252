use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use gigport_core::BoxError;
use gigport_order::{Order, OrderRepository, OrderStatus};

pub struct PgOrderRepository {
    pub pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ORDER_COLUMNS: &str = "id, customer_user, business_user, offer_detail_id, title, revisions,
     delivery_time_in_days, price, features, offer_type, status, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    customer_user: Uuid,
    business_user: Uuid,
    offer_detail_id: Uuid,
    title: String,
    revisions: i32,
    delivery_time_in_days: i32,
    price: Decimal,
    features: serde_json::Value,
    offer_type: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, BoxError> {
        Ok(Order {
            id: self.id,
            customer_user: self.customer_user,
            business_user: self.business_user,
            offer_detail_id: self.offer_detail_id,
            title: self.title,
            revisions: self.revisions,
            delivery_time_in_days: self.delivery_time_in_days,
            price: self.price,
            features: serde_json::from_value(self.features)?,
            offer_type: self.offer_type.parse().map_err(BoxError::from)?,
            status: OrderStatus::parse(&self.status).map_err(BoxError::from)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), BoxError> {
        sqlx::query(
            "INSERT INTO orders
                 (id, customer_user, business_user, offer_detail_id, title, revisions,
                  delivery_time_in_days, price, features, offer_type, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(order.id)
        .bind(order.customer_user)
        .bind(order.business_user)
        .bind(order.offer_detail_id)
        .bind(&order.title)
        .bind(order.revisions)
        .bind(order.delivery_time_in_days)
        .bind(order.price.round_dp(2))
        .bind(serde_json::to_value(&order.features)?)
        .bind(order.offer_type.as_str())
        .bind(order.status.as_str())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Order>, BoxError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(OrderRow::into_order).transpose()
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, BoxError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE customer_user = $1 OR business_user = $1
             ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(OrderRow::into_order).collect()
    }

    async fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<Option<Order>, BoxError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE orders SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.map(OrderRow::into_order).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_for_business(&self, business_user: Uuid, status: OrderStatus) -> Result<i64, BoxError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders WHERE business_user = $1 AND status = $2",
        )
        .bind(business_user)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
