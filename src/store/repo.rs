use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{KeyValueStore, StoreError};

/// Records that can be addressed inside a collection.
pub trait Identified {
    fn id(&self) -> Uuid;
}

/// Typed access to collections and singletons on top of a [`KeyValueStore`].
///
/// Reads never fail: a missing or unreadable blob reads as an empty collection
/// (or an absent singleton) and is logged. Writes are whole-blob replacements.
#[derive(Clone)]
pub struct Repository {
    kv: Arc<dyn KeyValueStore>,
    // serializes read-modify-write cycles inside this process
    write_lock: Arc<Mutex<()>>,
}

impl Repository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get_item(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "store read failed; treating as empty");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(key, error = %e, "corrupt blob; treating as empty");
                None
            }
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let body = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.kv.set_item(key, body).await
    }

    /// Full scan in insertion order.
    pub async fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read::<Vec<T>>(key).await.unwrap_or_default()
    }

    pub async fn append<T>(&self, key: &str, item: T) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<T> = self.list(key).await;
        items.push(item.clone());
        self.write(key, &items).await?;
        debug!(key, len = items.len(), "appended");
        Ok(item)
    }

    /// Removes the record with `id`. Returns `false` when nothing matched.
    pub async fn delete_by_id<T>(&self, key: &str, id: Uuid) -> Result<bool, StoreError>
    where
        T: Serialize + DeserializeOwned + Identified,
    {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<T> = self.list(key).await;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write(key, &items).await?;
        debug!(key, %id, len = items.len(), "deleted");
        Ok(true)
    }

    pub async fn get_singleton<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.read(key).await
    }

    pub async fn set_singleton<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(key, value).await
    }
}
