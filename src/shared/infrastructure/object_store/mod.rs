pub mod in_memory;

use async_trait::async_trait;

/// Blob storage for cover images. Returns a URL the UI can load directly.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, name: &str, content_type: &str, bytes: Vec<u8>) -> anyhow::Result<String>;
}
