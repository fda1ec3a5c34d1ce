use axum::async_trait;
use uuid::Uuid;

use crate::finance::repo_types::{Debt, DebtStatus, Expense, Revenue};

/// Keyed financial-record collections. Deletes and updates are scoped to
/// id AND owner so a foreign record behaves like a missing one.
#[async_trait]
pub trait FinanceStore: Send + Sync {
    async fn insert_expense(&self, expense: &Expense) -> anyhow::Result<()>;
    async fn list_expenses(&self, user_id: Uuid) -> anyhow::Result<Vec<Expense>>;
    async fn delete_expense(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;

    async fn insert_revenue(&self, revenue: &Revenue) -> anyhow::Result<()>;
    async fn list_revenues(&self, user_id: Uuid) -> anyhow::Result<Vec<Revenue>>;
    async fn delete_revenue(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;

    async fn insert_debt(&self, debt: &Debt) -> anyhow::Result<()>;
    async fn list_debts(&self, user_id: Uuid) -> anyhow::Result<Vec<Debt>>;
    async fn list_debts_by_status(
        &self,
        user_id: Uuid,
        status: DebtStatus,
    ) -> anyhow::Result<Vec<Debt>>;
    async fn delete_debt(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;
    async fn update_debt_status(
        &self,
        user_id: Uuid,
        id: Uuid,
        status: DebtStatus,
    ) -> anyhow::Result<bool>;
}
