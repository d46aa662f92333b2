use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    error::{bad_request, internal, ApiError},
    state::AppState,
    store::PROFILE,
};

use super::dto::PutProfileRequest;
use super::repo_types::UserProfile;
use super::services::build_profile;

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(put_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    let profile: Option<UserProfile> = state.repo.get_singleton(PROFILE).await;
    Json(profile.unwrap_or_default())
}

#[instrument(skip(state, payload))]
pub async fn put_profile(
    State(state): State<AppState>,
    Json(payload): Json<PutProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = build_profile(payload).map_err(|msg| {
        warn!(msg, "profile rejected");
        bad_request(msg)
    })?;
    state
        .repo
        .set_singleton(PROFILE, &profile)
        .await
        .map_err(internal)?;
    info!(name = %profile.name, "profile updated");
    Ok(Json(profile))
}
