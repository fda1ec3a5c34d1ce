use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo::UserStore;
use crate::auth::repo_types::User;
use crate::finance::repo::FinanceStore;
use crate::finance::repo_types::{Debt, DebtStatus, Expense, Revenue};
use crate::production::repo::ProductionStore;
use crate::production::repo_types::{Field, Harvest};
use crate::store::FETCH_LIMIT;

/// Postgres-backed document store. One table per collection, every row
/// keyed by owner id.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, phone, plan, trial_ends_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone)
        .bind(&user.plan)
        .bind(user.trial_ends_at)
        .bind(user.created_at)
        .execute(&self.db)
        .await
        .context("insert user")?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, phone, plan, trial_ends_at, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .context("find user by email")?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, phone, plan, trial_ends_at, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find user by id")?;
        Ok(user)
    }
}

#[async_trait]
impl FinanceStore for PgStore {
    async fn insert_expense(&self, expense: &Expense) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, user_id, amount, category, crop, kind, date, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(expense.id)
        .bind(expense.user_id)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.crop)
        .bind(&expense.kind)
        .bind(expense.date)
        .bind(&expense.note)
        .bind(expense.created_at)
        .execute(&self.db)
        .await
        .context("insert expense")?;
        Ok(())
    }

    async fn list_expenses(&self, user_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, amount, category, crop, kind, date, note, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(FETCH_LIMIT as i64)
        .fetch_all(&self.db)
        .await
        .context("list expenses")?;
        Ok(rows)
    }

    async fn delete_expense(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM expenses WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .context("delete expense")?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_revenue(&self, revenue: &Revenue) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO revenues (id, user_id, amount, crop, kind, date, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(revenue.id)
        .bind(revenue.user_id)
        .bind(revenue.amount)
        .bind(&revenue.crop)
        .bind(&revenue.kind)
        .bind(revenue.date)
        .bind(&revenue.note)
        .bind(revenue.created_at)
        .execute(&self.db)
        .await
        .context("insert revenue")?;
        Ok(())
    }

    async fn list_revenues(&self, user_id: Uuid) -> anyhow::Result<Vec<Revenue>> {
        let rows = sqlx::query_as::<_, Revenue>(
            r#"
            SELECT id, user_id, amount, crop, kind, date, note, created_at
            FROM revenues
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(FETCH_LIMIT as i64)
        .fetch_all(&self.db)
        .await
        .context("list revenues")?;
        Ok(rows)
    }

    async fn delete_revenue(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM revenues WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .context("delete revenue")?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_debt(&self, debt: &Debt) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO debts (id, user_id, amount, creditor, due_date, crop, status, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(debt.id)
        .bind(debt.user_id)
        .bind(debt.amount)
        .bind(&debt.creditor)
        .bind(debt.due_date)
        .bind(&debt.crop)
        .bind(debt.status.as_str())
        .bind(&debt.note)
        .bind(debt.created_at)
        .execute(&self.db)
        .await
        .context("insert debt")?;
        Ok(())
    }

    async fn list_debts(&self, user_id: Uuid) -> anyhow::Result<Vec<Debt>> {
        let rows = sqlx::query_as::<_, Debt>(
            r#"
            SELECT id, user_id, amount, creditor, due_date, crop, status, note, created_at
            FROM debts
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(FETCH_LIMIT as i64)
        .fetch_all(&self.db)
        .await
        .context("list debts")?;
        Ok(rows)
    }

    async fn list_debts_by_status(
        &self,
        user_id: Uuid,
        status: DebtStatus,
    ) -> anyhow::Result<Vec<Debt>> {
        let rows = sqlx::query_as::<_, Debt>(
            r#"
            SELECT id, user_id, amount, creditor, due_date, crop, status, note, created_at
            FROM debts
            WHERE user_id = $1 AND status = $2
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(status.as_str())
        .bind(FETCH_LIMIT as i64)
        .fetch_all(&self.db)
        .await
        .context("list debts by status")?;
        Ok(rows)
    }

    async fn delete_debt(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM debts WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .context("delete debt")?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_debt_status(
        &self,
        user_id: Uuid,
        id: Uuid,
        status: DebtStatus,
    ) -> anyhow::Result<bool> {
        let result =
            sqlx::query(r#"UPDATE debts SET status = $1 WHERE id = $2 AND user_id = $3"#)
                .bind(status.as_str())
                .bind(id)
                .bind(user_id)
                .execute(&self.db)
                .await
                .context("update debt status")?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProductionStore for PgStore {
    async fn insert_field(&self, field: &Field) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO fields (id, user_id, name, area_ha, crop, location, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(field.id)
        .bind(field.user_id)
        .bind(&field.name)
        .bind(field.area_ha)
        .bind(&field.crop)
        .bind(&field.location)
        .bind(field.created_at)
        .execute(&self.db)
        .await
        .context("insert field")?;
        Ok(())
    }

    async fn list_fields(&self, user_id: Uuid) -> anyhow::Result<Vec<Field>> {
        let rows = sqlx::query_as::<_, Field>(
            r#"
            SELECT id, user_id, name, area_ha, crop, location, created_at
            FROM fields
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(FETCH_LIMIT as i64)
        .fetch_all(&self.db)
        .await
        .context("list fields")?;
        Ok(rows)
    }

    async fn find_field(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Field>> {
        let field = sqlx::query_as::<_, Field>(
            r#"
            SELECT id, user_id, name, area_ha, crop, location, created_at
            FROM fields
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .context("find field")?;
        Ok(field)
    }

    async fn delete_field(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM fields WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .context("delete field")?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_harvest(&self, harvest: &Harvest) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO harvests
                (id, user_id, field_id, field_name, area_ha, crop, quantity,
                 productivity, harvest_date, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(harvest.id)
        .bind(harvest.user_id)
        .bind(harvest.field_id)
        .bind(&harvest.field_name)
        .bind(harvest.area_ha)
        .bind(&harvest.crop)
        .bind(harvest.quantity)
        .bind(harvest.productivity)
        .bind(harvest.harvest_date)
        .bind(&harvest.note)
        .bind(harvest.created_at)
        .execute(&self.db)
        .await
        .context("insert harvest")?;
        Ok(())
    }

    async fn list_harvests(&self, user_id: Uuid) -> anyhow::Result<Vec<Harvest>> {
        let rows = sqlx::query_as::<_, Harvest>(
            r#"
            SELECT id, user_id, field_id, field_name, area_ha, crop, quantity,
                   productivity, harvest_date, note, created_at
            FROM harvests
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(FETCH_LIMIT as i64)
        .fetch_all(&self.db)
        .await
        .context("list harvests")?;
        Ok(rows)
    }

    async fn delete_harvest(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM harvests WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .context("delete harvest")?;
        Ok(result.rows_affected() > 0)
    }
}
