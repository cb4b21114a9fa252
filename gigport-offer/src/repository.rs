use async_trait::async_trait;
use uuid::Uuid;

use gigport_core::BoxError;

use crate::models::{Offer, OfferDetail};

/// Repository trait for offer data access.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Persists the offer and all its tiers as one unit; nothing is written
    /// when any part fails.
    async fn create(&self, offer: &Offer) -> Result<(), BoxError>;

    async fn get(&self, id: Uuid) -> Result<Option<Offer>, BoxError>;

    /// All offers with their tiers, insertion order preserved. Filtering,
    /// ordering and pagination happen in the query layer.
    async fn list(&self) -> Result<Vec<Offer>, BoxError>;

    /// Writes the offer's scalar fields, `updated_at` and every owned tier
    /// back to the store.
    async fn update(&self, offer: &Offer) -> Result<(), BoxError>;

    /// Deletes the offer and, by cascade, its tiers. `false` for unknown ids.
    async fn delete(&self, id: Uuid) -> Result<bool, BoxError>;

    /// Single tier plus the owning offer's user id.
    async fn get_detail(&self, id: Uuid) -> Result<Option<(OfferDetail, Uuid)>, BoxError>;

    async fn count(&self) -> Result<i64, BoxError>;
}
