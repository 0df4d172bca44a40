//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::IncrementViewUseCase;
use crate::domain::repository::PostViewRepository;
use crate::error::BoardResult;
use crate::presentation::dto::MessageResponse;

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardAppState<R>
where
    R: PostViewRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/board/posts/{id}/view
pub async fn increment_view<R>(
    State(state): State<BoardAppState<R>>,
    Path(id): Path<String>,
) -> BoardResult<Json<MessageResponse>>
where
    R: PostViewRepository + Clone + Send + Sync + 'static,
{
    IncrementViewUseCase::new(state.repo.clone())
        .execute(&id)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "조회수가 증가했습니다.".to_string(),
    }))
}
