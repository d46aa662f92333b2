use std::sync::Arc;

use serde::Deserialize;
use time::{Date, OffsetDateTime, Time, UtcOffset};

use crate::config::AppConfig;
use crate::store::{FileStore, KeyValueStore, MemoryStore, Repository};

#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub config: Arc<AppConfig>,
}

/// `?date=YYYY-MM-DD`; absent means today.
#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    pub date: Option<Date>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);

        let kv = match &config.data_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "using file store");
                Arc::new(FileStore::open(dir).await?) as Arc<dyn KeyValueStore>
            }
            None => {
                tracing::warn!("AURA_DATA_DIR not set; data lives in memory only");
                Arc::new(MemoryStore::new()) as Arc<dyn KeyValueStore>
            }
        };

        Ok(Self::from_parts(kv, config))
    }

    pub fn from_parts(kv: Arc<dyn KeyValueStore>, config: Arc<AppConfig>) -> Self {
        Self {
            repo: Repository::new(kv),
            config,
        }
    }

    /// Current instant at the configured local offset.
    pub fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.config.utc_offset)
    }

    /// Instant whose local date is the requested day.
    pub fn reference_for(&self, q: &DayQuery) -> OffsetDateTime {
        match q.date {
            Some(date) => date.with_time(Time::MIDNIGHT).assume_offset(self.config.utc_offset),
            None => self.now(),
        }
    }

    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            data_dir: None,
            utc_offset: UtcOffset::UTC,
        });
        Self::from_parts(Arc::new(MemoryStore::new()), config)
    }
}
