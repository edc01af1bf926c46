use crate::shared::infrastructure::object_store::ObjectStore;
use anyhow::anyhow;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct InMemoryObjectStore {
    pub objects: RwLock<HashMap<String, StoredObject>>,
    is_offline: bool,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn upload(&self, name: &str, content_type: &str, bytes: Vec<u8>) -> anyhow::Result<String> {
        if self.is_offline {
            return Err(anyhow!("Object store offline"));
        }
        if name.trim().is_empty() {
            return Err(anyhow!("object name is empty"));
        }
        self.objects.write().await.insert(
            name.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(format!("memory://objects/{name}"))
    }
}
