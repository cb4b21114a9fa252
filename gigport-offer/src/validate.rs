use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gigport_core::FieldErrors;

use crate::models::OfferType;

pub const MSG_DELIVERY_TIME: &str = "Eingegebene Lieferzeit muss mindestens 1 Tag betragen.";
pub const MSG_PRICE: &str = "Eingegebener Preis muss höher als 1 sein.";
pub const MSG_REVISIONS: &str = "Eingegebene Anzahl der Revisionen muss eine positive Zahl sein.";
pub const MSG_FEATURES: &str = "Mindestens eine Feature muss vorhanden sein.";

/// A candidate pricing tier as submitted by a client, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailDraft {
    pub title: String,
    pub revisions: i32,
    pub delivery_time_in_days: i32,
    pub price: Decimal,
    #[serde(default)]
    pub features: Vec<String>,
    pub offer_type: OfferType,
}

/// Validation failures for one entry of a submitted detail list.
#[derive(Debug, Clone, Serialize)]
pub struct DetailErrors {
    pub index: usize,
    pub errors: FieldErrors,
}

/// Checks a single tier. All four checks are independent; every failing
/// field is reported, not just the first. The draft is not mutated;
/// price rounding happens at persistence, not here.
pub fn validate_detail(draft: &DetailDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if draft.delivery_time_in_days < 1 {
        errors.push("delivery_time_in_days", MSG_DELIVERY_TIME);
    }
    if draft.price <= Decimal::ONE {
        errors.push("price", MSG_PRICE);
    }
    if draft.revisions < -1 {
        errors.push("revisions", MSG_REVISIONS);
    }
    if draft.features.is_empty() {
        errors.push("features", MSG_FEATURES);
    }
    errors.into_result()
}

/// Validates a whole submitted detail list, collecting the errors of every
/// invalid entry before failing. Used by creation so nothing persists when
/// any tier is bad.
pub fn validate_details(drafts: &[DetailDraft]) -> Result<(), Vec<DetailErrors>> {
    let errors: Vec<DetailErrors> = drafts
        .iter()
        .enumerate()
        .filter_map(|(index, draft)| {
            validate_detail(draft)
                .err()
                .map(|errors| DetailErrors { index, errors })
        })
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
