use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{internal, ApiError},
    scoring::{filter_today, DailySummary},
    state::{AppState, DayQuery},
    store::WELLNESS_SCORES,
};

use super::repo_types::WellnessScoreRecord;
use super::services::{load_summary, snapshot};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route(
            "/dashboard/wellness-scores",
            get(list_wellness_scores).post(record_wellness_score),
        )
}

#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Json<DailySummary> {
    let summary = load_summary(&state.repo, state.reference_for(&q)).await;
    Json(summary)
}

/// Scores today and appends the result to the history.
#[instrument(skip(state))]
pub async fn record_wellness_score(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<WellnessScoreRecord>), ApiError> {
    let now = state.now();
    let summary = load_summary(&state.repo, now).await;
    let record = state
        .repo
        .append(WELLNESS_SCORES, snapshot(summary.breakdown, now))
        .await
        .map_err(internal)?;
    info!(id = %record.id, score = record.score, "wellness score recorded");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Newest first; `?date=` narrows to one local day.
#[instrument(skip(state))]
pub async fn list_wellness_scores(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Json<Vec<WellnessScoreRecord>> {
    let all: Vec<WellnessScoreRecord> = state.repo.list(WELLNESS_SCORES).await;
    let mut scores: Vec<WellnessScoreRecord> = match q.date {
        Some(_) => filter_today(&all, state.reference_for(&q))
            .into_iter()
            .cloned()
            .collect(),
        None => all,
    };
    scores.reverse();
    Json(scores)
}
