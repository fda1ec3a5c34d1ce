use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Named land parcel owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Field {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub area_ha: f64,
    pub crop: String,
    pub location: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Harvest record. The field name and area are snapshots taken at creation
/// time, and productivity is frozen with them — later field edits never
/// touch stored harvests.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Harvest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub field_id: Uuid,
    pub field_name: String,
    pub area_ha: f64,
    pub crop: String,
    pub quantity: f64,
    pub productivity: f64, // quantity / area_ha, rounded to 2 decimals
    #[serde(with = "time::serde::rfc3339")]
    pub harvest_date: OffsetDateTime,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
