use async_trait::async_trait;

use crate::error::BoxError;

/// Opaque file-storage collaborator: store a blob, get back a stable
/// locator; resolve a locator to a retrievable URL. Offer images and
/// profile pictures carry locators, never raw paths.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, BoxError>;

    fn url(&self, locator: &str) -> String;
}
