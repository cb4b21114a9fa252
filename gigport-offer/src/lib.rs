pub mod filter;
pub mod models;
pub mod ordering;
pub mod patch;
pub mod query;
pub mod repository;
pub mod validate;

pub use filter::OfferFilters;
pub use models::{Offer, OfferDetail, OfferType};
pub use ordering::OfferOrdering;
pub use patch::{DetailPatch, OfferPatch, PatchOutcome};
pub use query::OfferQuery;
pub use repository::OfferRepository;
pub use validate::{DetailDraft, DetailErrors};
