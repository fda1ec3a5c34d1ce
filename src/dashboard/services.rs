use std::collections::BTreeMap;

use crate::dashboard::dto::DashboardSummary;
use crate::finance::repo_types::{Debt, Expense, Revenue};

/// Bucket for records without a crop label.
pub const OTHER_CROP: &str = "Other";

/// Reduce a user's records into dashboard totals. Pure; recomputed fully on
/// every call.
pub fn summarize(
    revenues: Vec<Revenue>,
    expenses: Vec<Expense>,
    pending_debts: Vec<Debt>,
) -> DashboardSummary {
    let total_revenue: f64 = revenues.iter().map(|r| r.amount).sum();
    let total_expense: f64 = expenses.iter().map(|e| e.amount).sum();
    let total_pending_debt: f64 = pending_debts.iter().map(|d| d.amount).sum();

    let mut revenue_by_crop = BTreeMap::new();
    for r in &revenues {
        accumulate(&mut revenue_by_crop, r.crop.as_deref(), r.amount);
    }

    let mut expense_by_crop = BTreeMap::new();
    for e in &expenses {
        accumulate(&mut expense_by_crop, e.crop.as_deref(), e.amount);
    }

    DashboardSummary {
        total_revenue,
        total_expense,
        profit: total_revenue - total_expense,
        total_pending_debt,
        revenue_by_crop,
        expense_by_crop,
        pending_debts,
    }
}

fn accumulate(by_crop: &mut BTreeMap<String, f64>, crop: Option<&str>, amount: f64) {
    let label = crop.unwrap_or(OTHER_CROP);
    *by_crop.entry(label.to_string()).or_insert(0.0) += amount;
}
