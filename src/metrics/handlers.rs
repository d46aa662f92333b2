use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::{internal, not_found, ApiError},
    state::AppState,
    store::HEALTH_METRICS,
};

use super::dto::{CreateMetricRequest, MetricsResponse};
use super::repo_types::HealthMetric;
use super::services::{new_entry, recent_view};

pub fn metric_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(list_metrics).post(create_metric))
        .route("/metrics/:id", delete(delete_metric))
}

#[instrument(skip(state))]
pub async fn list_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let all: Vec<HealthMetric> = state.repo.list(HEALTH_METRICS).await;
    Json(recent_view(all))
}

#[instrument(skip(state, payload))]
pub async fn create_metric(
    State(state): State<AppState>,
    Json(payload): Json<CreateMetricRequest>,
) -> Result<(StatusCode, Json<HealthMetric>), ApiError> {
    let entry = new_entry(payload, state.now());
    let entry = state
        .repo
        .append(HEALTH_METRICS, entry)
        .await
        .map_err(internal)?;
    info!(id = %entry.id, steps = entry.steps, "health metric logged");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn delete_metric(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state
        .repo
        .delete_by_id::<HealthMetric>(HEALTH_METRICS, id)
        .await
        .map_err(internal)?
    {
        info!(%id, "health metric deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Health metric not found"))
    }
}
