use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    auth::extractors::CurrentUser,
    dashboard::{dto::DashboardSummary, services},
    error::AppResult,
    finance::repo_types::DebtStatus,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/summary", get(summary))
}

#[instrument(skip(state, user))]
pub async fn summary(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<DashboardSummary>> {
    let revenues = state.finance.list_revenues(user.id).await?;
    let expenses = state.finance.list_expenses(user.id).await?;
    let pending = state
        .finance
        .list_debts_by_status(user.id, DebtStatus::Pending)
        .await?;

    Ok(Json(services::summarize(revenues, expenses, pending)))
}
