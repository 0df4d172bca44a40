//! Donation Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type DonationResult<T> = Result<T, DonationError>;

#[derive(Debug, Error)]
pub enum DonationError {
    /// Query failure. The stats use case masks this one.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Totals do not fit the response type
    #[error("Donation total overflowed")]
    Overflow,
}

impl DonationError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), "후원 통계를 불러오는 중 오류가 발생했습니다.")
    }
}

impl IntoResponse for DonationError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Donation stats request failed");
        self.to_app_error().with_source(self).into_response()
    }
}
