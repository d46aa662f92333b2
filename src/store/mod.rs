//! Flat key-value persistence: every collection and singleton lives under one
//! key as a single JSON blob.

mod file;
mod memory;
pub mod repo;

use async_trait::async_trait;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repo::Repository;

pub const FOOD_LOGS: &str = "aura_food_logs";
pub const WATER_LOGS: &str = "aura_water_logs";
pub const HEALTH_METRICS: &str = "aura_health_metrics";
pub const DAILY_GOALS: &str = "aura_daily_goals";
pub const WELLNESS_SCORES: &str = "aura_wellness_scores";
pub const PROFILE: &str = "aura_profile";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError>;
}
