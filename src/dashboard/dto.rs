use std::collections::BTreeMap;

use serde::Serialize;

use crate::finance::repo_types::Debt;

/// Computed, non-persisted view over a user's financial records.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub total_expense: f64,
    pub profit: f64,
    pub total_pending_debt: f64,
    pub revenue_by_crop: BTreeMap<String, f64>,
    pub expense_by_crop: BTreeMap<String, f64>,
    pub pending_debts: Vec<Debt>,
}
