use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    error::{bad_request, internal, ApiError},
    state::AppState,
    store::DAILY_GOALS,
};

use super::dto::PutGoalsRequest;
use super::repo_types::DailyGoals;
use super::services::{current_goals, replace};

pub fn goal_routes() -> Router<AppState> {
    Router::new().route("/goals", get(get_goals).put(put_goals))
}

#[instrument(skip(state))]
pub async fn get_goals(State(state): State<AppState>) -> Json<DailyGoals> {
    Json(current_goals(&state.repo).await)
}

#[instrument(skip(state, payload))]
pub async fn put_goals(
    State(state): State<AppState>,
    Json(payload): Json<PutGoalsRequest>,
) -> Result<Json<DailyGoals>, ApiError> {
    let current = current_goals(&state.repo).await;
    let next = replace(&current, payload).map_err(|msg| {
        warn!(msg, "goals rejected");
        bad_request(msg)
    })?;
    state
        .repo
        .set_singleton(DAILY_GOALS, &next)
        .await
        .map_err(internal)?;
    info!(
        calorie_goal = next.calorie_goal,
        water_goal_ml = next.water_goal_ml,
        steps_goal = next.steps_goal,
        sleep_goal_hours = next.sleep_goal_hours,
        "goals replaced"
    );
    Ok(Json(next))
}
