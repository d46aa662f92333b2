use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::{bad_request, internal, not_found, ApiError},
    state::{AppState, DayQuery},
    store::FOOD_LOGS,
};

use super::dto::{CreateFoodRequest, FoodDayResponse};
use super::repo_types::FoodEntry;
use super::services::{day_view, new_entry};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/food", get(list_food).post(create_food))
        .route("/food/:id", delete(delete_food))
}

#[instrument(skip(state))]
pub async fn list_food(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Json<FoodDayResponse> {
    let all: Vec<FoodEntry> = state.repo.list(FOOD_LOGS).await;
    Json(day_view(&all, state.reference_for(&q)))
}

#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    Json(payload): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<FoodEntry>), ApiError> {
    let entry = new_entry(payload, state.now()).map_err(|msg| {
        warn!(msg, "food entry rejected");
        bad_request(msg)
    })?;
    let entry = state.repo.append(FOOD_LOGS, entry).await.map_err(internal)?;
    info!(id = %entry.id, calories = entry.calories, meal = ?entry.meal_type, "food logged");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state
        .repo
        .delete_by_id::<FoodEntry>(FOOD_LOGS, id)
        .await
        .map_err(internal)?
    {
        info!(%id, "food entry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Food entry not found"))
    }
}
