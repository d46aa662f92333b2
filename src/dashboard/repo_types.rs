use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::scoring::Logged;

/// A persisted wellness score snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessScoreRecord {
    pub id: Uuid,
    pub score: u8,
    pub nutrition_score: u8,
    pub hydration_score: u8,
    pub fitness_score: u8,
    pub sleep_score: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub calculated_at: OffsetDateTime,
}

impl Logged for WellnessScoreRecord {
    fn logged_at(&self) -> OffsetDateTime {
        self.calculated_at
    }
}
