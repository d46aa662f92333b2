use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::metrics::repo_types::HealthMetric;

/// Every field is optional; blanks and garbage read as null, steps as 0.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMetricRequest {
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub heart_rate: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub blood_pressure_systolic: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub blood_pressure_diastolic: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub sleep_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub steps: u32,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub latest: Option<HealthMetric>,
    pub recent: Vec<HealthMetric>, // newest first
}
