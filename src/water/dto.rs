use serde::{Deserialize, Serialize};
use time::Date;

use crate::lenient;
use crate::water::repo_types::WaterEntry;

#[derive(Debug, Deserialize)]
pub struct CreateWaterRequest {
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub amount_ml: u32,
}

#[derive(Debug, Serialize)]
pub struct WaterDayResponse {
    pub date: Date,
    pub entries: Vec<WaterEntry>, // newest first
    pub total_ml: u64,
    pub goal_ml: u32,
    pub remaining_ml: u64,
    pub percentage: u8,
    pub glasses: u64, // whole 250 ml glasses
    pub bottles: f64, // 500 ml bottles, one decimal
    pub quick_amounts: [u32; 4],
}
