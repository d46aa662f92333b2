use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{scoring::Logged, store::repo::Identified};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterEntry {
    pub id: Uuid,
    pub amount_ml: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Identified for WaterEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Logged for WaterEntry {
    fn logged_at(&self) -> OffsetDateTime {
        self.logged_at
    }
}
