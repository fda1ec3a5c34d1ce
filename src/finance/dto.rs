use serde::Deserialize;
use time::OffsetDateTime;

use crate::finance::repo_types::DebtStatus;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub category: String,
    pub crop: Option<String>,
    pub kind: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRevenueRequest {
    pub amount: f64,
    pub crop: Option<String>,
    pub kind: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDebtRequest {
    pub amount: f64,
    pub creditor: String,
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    pub crop: Option<String>,
    #[serde(default)]
    pub status: DebtStatus,
    pub note: Option<String>,
}

/// `?status=` query for the debt status PATCH. Values outside the
/// DebtStatus set are rejected with 400 by the Query extractor.
#[derive(Debug, Deserialize)]
pub struct DebtStatusQuery {
    pub status: DebtStatus,
}
