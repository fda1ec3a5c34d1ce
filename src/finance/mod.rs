mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::expense_routes())
        .merge(handlers::revenue_routes())
        .merge(handlers::debt_routes())
}
