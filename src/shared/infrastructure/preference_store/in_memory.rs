use crate::shared::infrastructure::preference_store::PreferenceStore;
use anyhow::anyhow;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow!("Preference store offline"));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow!("Preference store offline"));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
