use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use gigport_core::{BoxError, FileStore};

/// Blob storage on the local disk. Locators are unique file names under the
/// configured directory; URLs resolve under the configured public base.
pub struct LocalFileStore {
    dir: PathBuf,
    base_url: String,
}

impl LocalFileStore {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }
}

// Client-supplied names end up on disk, so strip anything that could walk
// out of the uploads directory.
fn sanitize(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    if safe.is_empty() {
        "upload".to_owned()
    } else {
        safe
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, BoxError> {
        let locator = format!("{}-{}", Uuid::new_v4(), sanitize(filename));
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&locator), bytes).await?;
        Ok(locator)
    }

    fn url(&self, locator: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), locator)
    }
}
