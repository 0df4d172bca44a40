//! Board Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    /// The view-count RPC failed
    #[error("View count update failed: {0}")]
    Database(#[from] sqlx::Error),
}

impl BoardError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            BoardError::Database(_) => "조회수 업데이트에 실패했습니다.",
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Board request failed");
        self.to_app_error().with_source(self).into_response()
    }
}
