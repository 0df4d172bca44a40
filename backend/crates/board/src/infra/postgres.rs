//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::repository::PostViewRepository;
use crate::error::BoardResult;

/// PostgreSQL-backed board repository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostViewRepository for PgBoardRepository {
    async fn increment_view_count(&self, post_id: &str) -> BoardResult<()> {
        sqlx::query("SELECT increment_view_count($1)")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
