mod dto;
pub mod handlers;
pub mod repo_types;
mod services;

pub use services::current_goals;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::goal_routes())
}
