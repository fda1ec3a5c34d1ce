use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::CurrentUser,
    error::{AppError, AppResult},
    finance::{
        dto::{CreateDebtRequest, CreateExpenseRequest, CreateRevenueRequest, DebtStatusQuery},
        repo_types::{Debt, Expense, Revenue},
    },
    state::AppState,
};

pub fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/:id", delete(delete_expense))
}

pub fn revenue_routes() -> Router<AppState> {
    Router::new()
        .route("/revenues", get(list_revenues).post(create_revenue))
        .route("/revenues/:id", delete(delete_revenue))
}

pub fn debt_routes() -> Router<AppState> {
    Router::new()
        .route("/debts", get(list_debts).post(create_debt))
        .route("/debts/:id", delete(delete_debt))
        .route("/debts/:id/status", patch(update_debt_status))
}

// --- expenses ---

#[instrument(skip(state, user, payload))]
pub async fn create_expense(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateExpenseRequest>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let expense = Expense {
        id: Uuid::new_v4(),
        user_id: user.id,
        amount: payload.amount,
        category: payload.category,
        crop: payload.crop,
        kind: payload.kind,
        date: payload.date,
        note: payload.note,
        created_at: OffsetDateTime::now_utc(),
    };
    state.finance.insert_expense(&expense).await?;
    info!(user_id = %user.id, expense_id = %expense.id, "expense created");
    Ok((StatusCode::CREATED, Json(expense)))
}

#[instrument(skip(state, user))]
pub async fn list_expenses(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Expense>>> {
    Ok(Json(state.finance.list_expenses(user.id).await?))
}

#[instrument(skip(state, user))]
pub async fn delete_expense(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    if !state.finance.delete_expense(user.id, id).await? {
        return Err(AppError::NotFound("Expense"));
    }
    Ok(Json(json!({ "message": "Expense deleted" })))
}

// --- revenues ---

#[instrument(skip(state, user, payload))]
pub async fn create_revenue(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateRevenueRequest>,
) -> AppResult<(StatusCode, Json<Revenue>)> {
    let revenue = Revenue {
        id: Uuid::new_v4(),
        user_id: user.id,
        amount: payload.amount,
        crop: payload.crop,
        kind: payload.kind,
        date: payload.date,
        note: payload.note,
        created_at: OffsetDateTime::now_utc(),
    };
    state.finance.insert_revenue(&revenue).await?;
    info!(user_id = %user.id, revenue_id = %revenue.id, "revenue created");
    Ok((StatusCode::CREATED, Json(revenue)))
}

#[instrument(skip(state, user))]
pub async fn list_revenues(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Revenue>>> {
    Ok(Json(state.finance.list_revenues(user.id).await?))
}

#[instrument(skip(state, user))]
pub async fn delete_revenue(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    if !state.finance.delete_revenue(user.id, id).await? {
        return Err(AppError::NotFound("Revenue"));
    }
    Ok(Json(json!({ "message": "Revenue deleted" })))
}

// --- debts ---

#[instrument(skip(state, user, payload))]
pub async fn create_debt(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateDebtRequest>,
) -> AppResult<(StatusCode, Json<Debt>)> {
    let debt = Debt {
        id: Uuid::new_v4(),
        user_id: user.id,
        amount: payload.amount,
        creditor: payload.creditor,
        due_date: payload.due_date,
        crop: payload.crop,
        status: payload.status,
        note: payload.note,
        created_at: OffsetDateTime::now_utc(),
    };
    state.finance.insert_debt(&debt).await?;
    info!(user_id = %user.id, debt_id = %debt.id, "debt created");
    Ok((StatusCode::CREATED, Json(debt)))
}

#[instrument(skip(state, user))]
pub async fn list_debts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Debt>>> {
    Ok(Json(state.finance.list_debts(user.id).await?))
}

#[instrument(skip(state, user))]
pub async fn delete_debt(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    if !state.finance.delete_debt(user.id, id).await? {
        return Err(AppError::NotFound("Debt"));
    }
    Ok(Json(json!({ "message": "Debt deleted" })))
}

#[instrument(skip(state, user))]
pub async fn update_debt_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Query(query): Query<DebtStatusQuery>,
) -> AppResult<Json<Value>> {
    if !state
        .finance
        .update_debt_status(user.id, id, query.status)
        .await?
    {
        return Err(AppError::NotFound("Debt"));
    }
    info!(user_id = %user.id, debt_id = %id, status = %query.status, "debt status updated");
    Ok(Json(json!({ "message": "Status updated" })))
}
