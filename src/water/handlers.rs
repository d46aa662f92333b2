use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::{internal, not_found, ApiError},
    goals::current_goals,
    state::{AppState, DayQuery},
    store::WATER_LOGS,
};

use super::dto::{CreateWaterRequest, WaterDayResponse};
use super::repo_types::WaterEntry;
use super::services::{day_view, new_entry};

pub fn water_routes() -> Router<AppState> {
    Router::new()
        .route("/water", get(list_water).post(create_water))
        .route("/water/:id", delete(delete_water))
}

#[instrument(skip(state))]
pub async fn list_water(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Json<WaterDayResponse> {
    let all: Vec<WaterEntry> = state.repo.list(WATER_LOGS).await;
    let goals = current_goals(&state.repo).await;
    Json(day_view(&all, goals.water_goal_ml, state.reference_for(&q)))
}

#[instrument(skip(state, payload))]
pub async fn create_water(
    State(state): State<AppState>,
    Json(payload): Json<CreateWaterRequest>,
) -> Result<(StatusCode, Json<WaterEntry>), ApiError> {
    let entry = new_entry(payload.amount_ml, state.now());
    let entry = state.repo.append(WATER_LOGS, entry).await.map_err(internal)?;
    info!(id = %entry.id, amount_ml = entry.amount_ml, "water logged");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn delete_water(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state
        .repo
        .delete_by_id::<WaterEntry>(WATER_LOGS, id)
        .await
        .map_err(internal)?
    {
        info!(%id, "water entry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Water entry not found"))
    }
}
