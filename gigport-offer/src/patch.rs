use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use gigport_core::FieldErrors;

use crate::models::{Offer, OfferType};
use crate::validate::{DetailErrors, MSG_DELIVERY_TIME, MSG_FEATURES, MSG_PRICE, MSG_REVISIONS};

/// Partial offer update. Scalar fields apply unconditionally when present;
/// detail entries are matched by id against the offer's current tiers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub details: Option<Vec<DetailPatch>>,
}

/// Per-tier part of a patch; `None` fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailPatch {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub revisions: Option<i32>,
    pub delivery_time_in_days: Option<i32>,
    pub price: Option<Decimal>,
    pub features: Option<Vec<String>>,
    pub offer_type: Option<OfferType>,
}

/// How a patch landed: entries whose id matched an owned tier were applied,
/// entries with an unknown or missing id were ignored without error. The
/// ignore is part of the wire contract; callers log it so it stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOutcome {
    pub applied: usize,
    pub ignored: usize,
}

/// Checks the fields a patch actually carries against the same rules the
/// detail validator applies at creation.
pub fn validate_patch(patch: &OfferPatch) -> Result<(), Vec<DetailErrors>> {
    let Some(details) = &patch.details else {
        return Ok(());
    };
    let errors: Vec<DetailErrors> = details
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let mut errors = FieldErrors::new();
            if matches!(entry.delivery_time_in_days, Some(days) if days < 1) {
                errors.push("delivery_time_in_days", MSG_DELIVERY_TIME);
            }
            if matches!(entry.price, Some(price) if price <= Decimal::ONE) {
                errors.push("price", MSG_PRICE);
            }
            if matches!(entry.revisions, Some(revisions) if revisions < -1) {
                errors.push("revisions", MSG_REVISIONS);
            }
            if matches!(&entry.features, Some(features) if features.is_empty()) {
                errors.push("features", MSG_FEATURES);
            }
            errors.into_result().err().map(|errors| DetailErrors { index, errors })
        })
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Applies a validated patch in place. Prices are re-rounded to two
/// decimals as they change. The caller bumps `updated_at` and persists.
pub fn apply(offer: &mut Offer, patch: &OfferPatch) -> PatchOutcome {
    if let Some(title) = &patch.title {
        offer.title = title.clone();
    }
    if let Some(description) = &patch.description {
        offer.description = description.clone();
    }
    if let Some(image) = &patch.image {
        offer.image = Some(image.clone());
    }

    let mut outcome = PatchOutcome { applied: 0, ignored: 0 };
    if let Some(entries) = &patch.details {
        for entry in entries {
            let target = entry
                .id
                .and_then(|id| offer.details.iter_mut().find(|d| d.id == id));
            let Some(detail) = target else {
                outcome.ignored += 1;
                continue;
            };
            if let Some(title) = &entry.title {
                detail.title = title.clone();
            }
            if let Some(revisions) = entry.revisions {
                detail.revisions = revisions;
            }
            if let Some(days) = entry.delivery_time_in_days {
                detail.delivery_time_in_days = days;
            }
            if let Some(price) = entry.price {
                detail.price = price;
                detail.round_price();
            }
            if let Some(features) = &entry.features {
                detail.features = features.clone();
            }
            if let Some(offer_type) = entry.offer_type {
                detail.offer_type = offer_type;
            }
            outcome.applied += 1;
        }
    }
    outcome
}
