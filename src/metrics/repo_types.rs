use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{scoring::Logged, store::repo::Identified};

/// One vitals reading. Systolic and diastolic are either both set or both null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetric {
    pub id: Uuid,
    pub heart_rate: Option<u32>,
    pub blood_pressure_systolic: Option<u32>,
    pub blood_pressure_diastolic: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub steps: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Identified for HealthMetric {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Logged for HealthMetric {
    fn logged_at(&self) -> OffsetDateTime {
        self.logged_at
    }
}
