use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::DetailDraft;

/// Pricing tier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Basic,
    Standard,
    Premium,
}

impl OfferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferType::Basic => "basic",
            OfferType::Standard => "standard",
            OfferType::Premium => "premium",
        }
    }
}

impl std::str::FromStr for OfferType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(OfferType::Basic),
            "standard" => Ok(OfferType::Standard),
            "premium" => Ok(OfferType::Premium),
            other => Err(format!("unknown offer type: {other}")),
        }
    }
}

impl std::fmt::Display for OfferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pricing tier of an offer. `revisions == -1` means unlimited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDetail {
    pub id: Uuid,
    pub offer_id: Uuid,
    pub offer_type: OfferType,
    pub title: String,
    pub price: Decimal,
    pub delivery_time_in_days: i32,
    pub revisions: i32,
    pub features: Vec<String>,
}

impl OfferDetail {
    pub fn from_draft(offer_id: Uuid, draft: DetailDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            offer_id,
            offer_type: draft.offer_type,
            title: draft.title,
            price: draft.price,
            delivery_time_in_days: draft.delivery_time_in_days,
            revisions: draft.revisions,
            features: draft.features,
        }
    }

    /// Prices are persisted with exactly two fractional digits regardless of
    /// input precision. Called on every write path.
    pub fn round_price(&mut self) {
        self.price = self.price.round_dp(2);
    }
}

/// A seller's listing with its owned pricing tiers, ordered by insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: Vec<OfferDetail>,
}

impl Offer {
    /// Builds a new offer together with its initial tiers; the two are never
    /// created apart.
    pub fn new(
        user_id: Uuid,
        title: String,
        description: String,
        image: Option<String>,
        drafts: Vec<DetailDraft>,
    ) -> Self {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let details = drafts
            .into_iter()
            .map(|draft| OfferDetail::from_draft(id, draft))
            .collect();
        Self {
            id,
            user_id,
            title,
            description,
            image,
            created_at: now,
            updated_at: now,
            details,
        }
    }

    /// Cheapest tier price, computed per read. `None` for a detail-less offer.
    pub fn min_price(&self) -> Option<Decimal> {
        self.details.iter().map(|d| d.price).min()
    }

    /// Fastest tier delivery time in days, computed per read.
    pub fn min_delivery_time(&self) -> Option<i32> {
        self.details.iter().map(|d| d.delivery_time_in_days).min()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
