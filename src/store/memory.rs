use std::sync::Mutex;

use axum::async_trait;
use uuid::Uuid;

use crate::auth::repo::UserStore;
use crate::auth::repo_types::User;
use crate::finance::repo::FinanceStore;
use crate::finance::repo_types::{Debt, DebtStatus, Expense, Revenue};
use crate::production::repo::ProductionStore;
use crate::production::repo_types::{Field, Harvest};
use crate::store::FETCH_LIMIT;

/// In-memory document store backing tests. Keeps the same keyed-collection
/// contract as PgStore: newest-first listings capped at FETCH_LIMIT,
/// deletes and updates scoped to id AND owner.
#[derive(Default)]
pub struct MemStore {
    inner: Mutex<Collections>,
}

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    expenses: Vec<Expense>,
    revenues: Vec<Revenue>,
    debts: Vec<Debt>,
    fields: Vec<Field>,
    harvests: Vec<Harvest>,
}

fn list_owned<T: Clone>(items: &[T], owner: impl Fn(&T) -> bool) -> Vec<T> {
    // Insertion order reversed == created_at DESC.
    items
        .iter()
        .rev()
        .filter(|item| owner(item))
        .take(FETCH_LIMIT)
        .cloned()
        .collect()
}

fn delete_owned<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !matches(item));
    items.len() < before
}

#[async_trait]
impl UserStore for MemStore {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        self.inner.lock().unwrap().users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl FinanceStore for MemStore {
    async fn insert_expense(&self, expense: &Expense) -> anyhow::Result<()> {
        self.inner.lock().unwrap().expenses.push(expense.clone());
        Ok(())
    }

    async fn list_expenses(&self, user_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        let inner = self.inner.lock().unwrap();
        Ok(list_owned(&inner.expenses, |e| e.user_id == user_id))
    }

    async fn delete_expense(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        Ok(delete_owned(&mut inner.expenses, |e| {
            e.id == id && e.user_id == user_id
        }))
    }

    async fn insert_revenue(&self, revenue: &Revenue) -> anyhow::Result<()> {
        self.inner.lock().unwrap().revenues.push(revenue.clone());
        Ok(())
    }

    async fn list_revenues(&self, user_id: Uuid) -> anyhow::Result<Vec<Revenue>> {
        let inner = self.inner.lock().unwrap();
        Ok(list_owned(&inner.revenues, |r| r.user_id == user_id))
    }

    async fn delete_revenue(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        Ok(delete_owned(&mut inner.revenues, |r| {
            r.id == id && r.user_id == user_id
        }))
    }

    async fn insert_debt(&self, debt: &Debt) -> anyhow::Result<()> {
        self.inner.lock().unwrap().debts.push(debt.clone());
        Ok(())
    }

    async fn list_debts(&self, user_id: Uuid) -> anyhow::Result<Vec<Debt>> {
        let inner = self.inner.lock().unwrap();
        Ok(list_owned(&inner.debts, |d| d.user_id == user_id))
    }

    async fn list_debts_by_status(
        &self,
        user_id: Uuid,
        status: DebtStatus,
    ) -> anyhow::Result<Vec<Debt>> {
        let inner = self.inner.lock().unwrap();
        Ok(list_owned(&inner.debts, |d| {
            d.user_id == user_id && d.status == status
        }))
    }

    async fn delete_debt(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        Ok(delete_owned(&mut inner.debts, |d| {
            d.id == id && d.user_id == user_id
        }))
    }

    async fn update_debt_status(
        &self,
        user_id: Uuid,
        id: Uuid,
        status: DebtStatus,
    ) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        match inner
            .debts
            .iter_mut()
            .find(|d| d.id == id && d.user_id == user_id)
        {
            Some(debt) => {
                debt.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ProductionStore for MemStore {
    async fn insert_field(&self, field: &Field) -> anyhow::Result<()> {
        self.inner.lock().unwrap().fields.push(field.clone());
        Ok(())
    }

    async fn list_fields(&self, user_id: Uuid) -> anyhow::Result<Vec<Field>> {
        let inner = self.inner.lock().unwrap();
        Ok(list_owned(&inner.fields, |f| f.user_id == user_id))
    }

    async fn find_field(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Field>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .fields
            .iter()
            .find(|f| f.id == id && f.user_id == user_id)
            .cloned())
    }

    async fn delete_field(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        Ok(delete_owned(&mut inner.fields, |f| {
            f.id == id && f.user_id == user_id
        }))
    }

    async fn insert_harvest(&self, harvest: &Harvest) -> anyhow::Result<()> {
        self.inner.lock().unwrap().harvests.push(harvest.clone());
        Ok(())
    }

    async fn list_harvests(&self, user_id: Uuid) -> anyhow::Result<Vec<Harvest>> {
        let inner = self.inner.lock().unwrap();
        Ok(list_owned(&inner.harvests, |h| h.user_id == user_id))
    }

    async fn delete_harvest(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        Ok(delete_owned(&mut inner.harvests, |h| {
            h.id == id && h.user_id == user_id
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn expense_for(user_id: Uuid) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            user_id,
            amount: 10.0,
            category: "inputs".into(),
            crop: None,
            kind: "purchase".into(),
            date: OffsetDateTime::now_utc(),
            note: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn debt_for(user_id: Uuid, status: DebtStatus) -> Debt {
        Debt {
            id: Uuid::new_v4(),
            user_id,
            amount: 100.0,
            creditor: "co-op".into(),
            due_date: OffsetDateTime::now_utc(),
            crop: None,
            status,
            note: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn listings_are_scoped_to_the_owner() {
        let store = MemStore::default();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        store.insert_expense(&expense_for(alice)).await.unwrap();
        store.insert_expense(&expense_for(bob)).await.unwrap();

        assert_eq!(store.list_expenses(alice).await.unwrap().len(), 1);
        assert_eq!(store.list_expenses(bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_by_foreign_owner_is_a_miss() {
        let store = MemStore::default();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        let expense = expense_for(alice);
        store.insert_expense(&expense).await.unwrap();

        assert!(!store.delete_expense(bob, expense.id).await.unwrap());
        assert!(store.delete_expense(alice, expense.id).await.unwrap());
        assert!(store.list_expenses(alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn debt_status_filter_and_update() {
        let store = MemStore::default();
        let alice = Uuid::new_v4();
        let pending = debt_for(alice, DebtStatus::Pending);
        store.insert_debt(&pending).await.unwrap();
        store
            .insert_debt(&debt_for(alice, DebtStatus::Paid))
            .await
            .unwrap();

        let listed = store
            .list_debts_by_status(alice, DebtStatus::Pending)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, pending.id);

        assert!(store
            .update_debt_status(alice, pending.id, DebtStatus::Paid)
            .await
            .unwrap());
        assert!(store
            .list_debts_by_status(alice, DebtStatus::Pending)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn status_update_by_foreign_owner_is_a_miss() {
        let store = MemStore::default();
        let (alice, mallory) = (Uuid::new_v4(), Uuid::new_v4());
        let debt = debt_for(alice, DebtStatus::Pending);
        store.insert_debt(&debt).await.unwrap();

        assert!(!store
            .update_debt_status(mallory, debt.id, DebtStatus::Paid)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn listings_are_capped_at_fetch_limit() {
        let store = MemStore::default();
        let alice = Uuid::new_v4();
        for _ in 0..FETCH_LIMIT + 5 {
            store.insert_expense(&expense_for(alice)).await.unwrap();
        }
        let listed = store.list_expenses(alice).await.unwrap();
        assert_eq!(listed.len(), FETCH_LIMIT);
    }
}
