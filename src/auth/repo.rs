use axum::async_trait;
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Keyed user collection. Implemented by the Postgres store and the
/// in-memory store used in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()>;

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
}
