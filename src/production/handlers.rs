use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::CurrentUser,
    error::{AppError, AppResult},
    production::{
        dto::{CreateFieldRequest, CreateHarvestRequest},
        repo_types::{Field, Harvest},
        services,
    },
    state::AppState,
};

pub fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/fields", get(list_fields).post(create_field))
        .route("/fields/:id", delete(delete_field))
}

pub fn harvest_routes() -> Router<AppState> {
    Router::new()
        .route("/harvests", get(list_harvests).post(create_harvest))
        .route("/harvests/:id", delete(delete_harvest))
}

// --- fields ---

#[instrument(skip(state, user, payload))]
pub async fn create_field(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateFieldRequest>,
) -> AppResult<(StatusCode, Json<Field>)> {
    if !(payload.area_ha.is_finite() && payload.area_ha > 0.0) {
        return Err(AppError::Validation("area_ha must be positive".into()));
    }

    let field = Field {
        id: Uuid::new_v4(),
        user_id: user.id,
        name: payload.name,
        area_ha: payload.area_ha,
        crop: payload.crop,
        location: payload.location,
        created_at: OffsetDateTime::now_utc(),
    };
    state.production.insert_field(&field).await?;
    info!(user_id = %user.id, field_id = %field.id, "field created");
    Ok((StatusCode::CREATED, Json(field)))
}

#[instrument(skip(state, user))]
pub async fn list_fields(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Field>>> {
    Ok(Json(state.production.list_fields(user.id).await?))
}

#[instrument(skip(state, user))]
pub async fn delete_field(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    if !state.production.delete_field(user.id, id).await? {
        return Err(AppError::NotFound("Field"));
    }
    Ok(Json(json!({ "message": "Field deleted" })))
}

// --- harvests ---

#[instrument(skip(state, user, payload))]
pub async fn create_harvest(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateHarvestRequest>,
) -> AppResult<(StatusCode, Json<Harvest>)> {
    let harvest = services::create_harvest(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(harvest)))
}

#[instrument(skip(state, user))]
pub async fn list_harvests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Harvest>>> {
    Ok(Json(state.production.list_harvests(user.id).await?))
}

#[instrument(skip(state, user))]
pub async fn delete_harvest(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    if !state.production.delete_harvest(user.id, id).await? {
        return Err(AppError::NotFound("Harvest"));
    }
    Ok(Json(json!({ "message": "Harvest deleted" })))
}
