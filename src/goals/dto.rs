use serde::Deserialize;

use crate::lenient;

/// Full replacement of the daily targets. Every field is required.
#[derive(Debug, Deserialize)]
pub struct PutGoalsRequest {
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub calorie_goal: u32,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub water_goal_ml: u32,
    #[serde(deserialize_with = "lenient::u32_or_zero")]
    pub steps_goal: u32,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub sleep_goal_hours: f64,
}
