use axum::async_trait;
use uuid::Uuid;

use crate::production::repo_types::{Field, Harvest};

/// Keyed field/harvest collections, scoped to id AND owner.
#[async_trait]
pub trait ProductionStore: Send + Sync {
    async fn insert_field(&self, field: &Field) -> anyhow::Result<()>;
    async fn list_fields(&self, user_id: Uuid) -> anyhow::Result<Vec<Field>>;
    async fn find_field(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Field>>;
    async fn delete_field(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;

    async fn insert_harvest(&self, harvest: &Harvest) -> anyhow::Result<()>;
    async fn list_harvests(&self, user_id: Uuid) -> anyhow::Result<Vec<Harvest>>;
    async fn delete_harvest(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;
}
