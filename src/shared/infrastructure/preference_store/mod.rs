pub mod in_memory;

use async_trait::async_trait;

/// Key/value store for UI and mail preferences. Never holds book records.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
