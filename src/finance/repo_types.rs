use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Expense record owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub category: String,
    pub crop: Option<String>,
    pub kind: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Revenue record owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Revenue {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub crop: Option<String>,
    pub kind: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Debt lifecycle. Stored as text; anything outside this set is rejected
/// at the API edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    #[default]
    Pending,
    Paid,
}

impl DebtStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DebtStatus::Pending => "pending",
            DebtStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DebtStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(DebtStatus::Pending),
            "paid" => Ok(DebtStatus::Paid),
            other => Err(format!("unknown debt status: {other}")),
        }
    }
}

/// Debt record owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Debt {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub creditor: String,
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    pub crop: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: DebtStatus,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debt_status_parses_known_values_only() {
        assert_eq!(DebtStatus::try_from("pending".to_string()), Ok(DebtStatus::Pending));
        assert_eq!(DebtStatus::try_from("paid".to_string()), Ok(DebtStatus::Paid));
        assert!(DebtStatus::try_from("overdue".to_string()).is_err());
    }

    #[test]
    fn debt_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DebtStatus::Pending).unwrap(), "\"pending\"");
    }
}
