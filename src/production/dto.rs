use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateFieldRequest {
    pub name: String,
    pub area_ha: f64,
    pub crop: String,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHarvestRequest {
    pub field_id: Uuid,
    pub crop: String,
    pub quantity: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub harvest_date: OffsetDateTime,
    pub note: Option<String>,
}
