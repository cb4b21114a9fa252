use async_trait::async_trait;
use uuid::Uuid;

use gigport_core::BoxError;

use crate::models::{Order, OrderStatus};

/// Repository trait for order data access.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<(), BoxError>;

    async fn get(&self, id: Uuid) -> Result<Option<Order>, BoxError>;

    /// Orders where the user is either side of the deal, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>, BoxError>;

    /// Sets the status and bumps `updated_at`. `None` for unknown ids.
    async fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<Option<Order>, BoxError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BoxError>;

    async fn count_for_business(&self, business_user: Uuid, status: OrderStatus) -> Result<i64, BoxError>;
}
