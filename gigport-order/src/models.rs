use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gigport_offer::{OfferDetail, OfferType};

pub const MSG_INVALID_STATUS: &str =
    "Ungültiger Status. Erlaubte Werte: 'in_progress', 'completed', 'cancelled'.";

/// Order lifecycle: starts in progress, ends completed or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parses a client-supplied status, rejecting anything outside the
    /// vocabulary with the user-facing message.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "in_progress" => Ok(OrderStatus::InProgress),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(MSG_INVALID_STATUS.to_owned()),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's commitment against one specific offer tier. The tier's
/// fields are snapshotted at placement so later offer edits do not rewrite
/// running orders.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_user: Uuid,
    pub business_user: Uuid,
    pub offer_detail_id: Uuid,
    pub title: String,
    pub revisions: i32,
    pub delivery_time_in_days: i32,
    pub price: Decimal,
    pub features: Vec<String>,
    pub offer_type: OfferType,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Placement payload: the tier reference plus optional overrides. Any field
/// left `None` defaults from the referenced tier.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDraft {
    pub offer_detail_id: Uuid,
    pub title: Option<String>,
    pub revisions: Option<i32>,
    pub delivery_time_in_days: Option<i32>,
    pub price: Option<Decimal>,
    pub features: Option<Vec<String>>,
    pub offer_type: Option<OfferType>,
}

impl Order {
    /// Builds an order from a draft, defaulting every unset field from the
    /// referenced tier. `business_user` is the tier's offer owner.
    pub fn from_detail(customer_user: Uuid, business_user: Uuid, detail: &OfferDetail, draft: OrderDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_user,
            business_user,
            offer_detail_id: detail.id,
            title: draft.title.unwrap_or_else(|| detail.title.clone()),
            revisions: draft.revisions.unwrap_or(detail.revisions),
            delivery_time_in_days: draft.delivery_time_in_days.unwrap_or(detail.delivery_time_in_days),
            price: draft.price.unwrap_or(detail.price),
            features: draft.features.unwrap_or_else(|| detail.features.clone()),
            offer_type: draft.offer_type.unwrap_or(detail.offer_type),
            status: OrderStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }
}
