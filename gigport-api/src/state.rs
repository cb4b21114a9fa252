use std::sync::Arc;

use gigport_core::{FileStore, ProfileRepository, ReviewRepository};
use gigport_offer::OfferRepository;
use gigport_order::OrderRepository;

/// Token-signing parameters shared by the login flow and the extractor.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration_seconds: u64,
}

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub offers: Arc<dyn OfferRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub files: Arc<dyn FileStore>,
    pub auth: AuthConfig,
}
