use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CALORIE_GOAL: u32 = 2000;
pub const DEFAULT_WATER_GOAL_ML: u32 = 2000;
pub const DEFAULT_STEPS_GOAL: u32 = 10_000;
pub const DEFAULT_SLEEP_GOAL_HOURS: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    pub id: Uuid,
    pub calorie_goal: u32,
    pub water_goal_ml: u32,
    pub steps_goal: u32,
    pub sleep_goal_hours: f64,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            calorie_goal: DEFAULT_CALORIE_GOAL,
            water_goal_ml: DEFAULT_WATER_GOAL_ML,
            steps_goal: DEFAULT_STEPS_GOAL,
            sleep_goal_hours: DEFAULT_SLEEP_GOAL_HOURS,
        }
    }
}
