use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::error::{AppError, AppResult};
use crate::production::dto::CreateHarvestRequest;
use crate::production::repo_types::Harvest;
use crate::state::AppState;

/// Yield per hectare, rounded to two decimals.
pub fn productivity(quantity: f64, area_ha: f64) -> f64 {
    round2(quantity / area_ha)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Resolve the field by id and owner, derive productivity, and persist the
/// harvest with the field snapshot frozen in.
pub async fn create_harvest(
    state: &AppState,
    user: &User,
    payload: CreateHarvestRequest,
) -> AppResult<Harvest> {
    let field = state
        .production
        .find_field(user.id, payload.field_id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.id, field_id = %payload.field_id, "harvest for unknown field");
            AppError::NotFound("Field")
        })?;

    let harvest = Harvest {
        id: Uuid::new_v4(),
        user_id: user.id,
        field_id: field.id,
        field_name: field.name,
        area_ha: field.area_ha,
        crop: payload.crop,
        quantity: payload.quantity,
        productivity: productivity(payload.quantity, field.area_ha),
        harvest_date: payload.harvest_date,
        note: payload.note,
        created_at: OffsetDateTime::now_utc(),
    };
    state.production.insert_harvest(&harvest).await?;

    info!(
        user_id = %user.id,
        harvest_id = %harvest.id,
        productivity = harvest.productivity,
        "harvest created"
    );
    Ok(harvest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn productivity_rounds_to_two_decimals() {
        assert_eq!(productivity(153.0, 25.5), 6.0);
        assert_eq!(productivity(100.0, 3.0), 33.33);
        assert_eq!(productivity(200.0, 3.0), 66.67);
    }

    #[test]
    fn productivity_of_zero_yield_is_zero() {
        assert_eq!(productivity(0.0, 12.0), 0.0);
    }
}
