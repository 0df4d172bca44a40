//! Increment View Use Case

use std::sync::Arc;

use crate::domain::repository::PostViewRepository;
use crate::error::BoardResult;

pub struct IncrementViewUseCase<R>
where
    R: PostViewRepository,
{
    repo: Arc<R>,
}

impl<R> IncrementViewUseCase<R>
where
    R: PostViewRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// No retry and no dedup: a repeated call counts again.
    pub async fn execute(&self, post_id: &str) -> BoardResult<()> {
        self.repo.increment_view_count(post_id).await?;
        tracing::debug!(post_id = %post_id, "Post view counted");
        Ok(())
    }
}
