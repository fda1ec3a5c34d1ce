use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Quotation {
    pub product: String,
    pub price: f64,
    pub change_pct: f64,
    pub unit: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}
