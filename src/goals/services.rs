use crate::goals::dto::PutGoalsRequest;
use crate::goals::repo_types::DailyGoals;
use crate::store::{Repository, DAILY_GOALS};

/// Stored goals, or the defaults when none are stored or the blob is unreadable.
pub async fn current_goals(repo: &Repository) -> DailyGoals {
    repo.get_singleton(DAILY_GOALS).await.unwrap_or_default()
}

/// Builds the replacement record. All four targets must be positive.
pub(crate) fn replace(current: &DailyGoals, req: PutGoalsRequest) -> Result<DailyGoals, &'static str> {
    if req.calorie_goal == 0 {
        return Err("calorie_goal must be greater than 0");
    }
    if req.water_goal_ml == 0 {
        return Err("water_goal_ml must be greater than 0");
    }
    if req.steps_goal == 0 {
        return Err("steps_goal must be greater than 0");
    }
    if req.sleep_goal_hours <= 0.0 {
        return Err("sleep_goal_hours must be greater than 0");
    }
    Ok(DailyGoals {
        id: current.id,
        calorie_goal: req.calorie_goal,
        water_goal_ml: req.water_goal_ml,
        steps_goal: req.steps_goal,
        sleep_goal_hours: req.sleep_goal_hours,
    })
}
