//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// User-facing message for every server-side failure
pub const SERVER_ERROR_MESSAGE: &str = "서버 오류가 발생했습니다.";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body could not be read
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Email or password left blank
    #[error("Email and password are required")]
    MissingCredentials,

    /// Auth service rejected the credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Application-level session refresh is not offered
    #[error("Session refresh is handled automatically")]
    RefreshDisabled,

    /// Auth service answered with an unexpected status
    #[error("Auth service error: {0}")]
    Upstream(String),

    /// Transport failure talking to the auth service
    #[error("Auth service unreachable: {0}")]
    Http(#[from] reqwest::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidRequest(_) | AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::RefreshDisabled => ErrorKind::Gone,
            AuthError::Upstream(_)
            | AuthError::Http(_)
            | AuthError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message shown to the client. Server-side details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::InvalidRequest(_) => "요청 형식이 올바르지 않습니다.".to_string(),
            AuthError::MissingCredentials => "이메일과 비밀번호를 입력해주세요.".to_string(),
            AuthError::InvalidCredentials => "이메일 또는 비밀번호가 올바르지 않습니다.".to_string(),
            AuthError::RefreshDisabled => {
                "세션 갱신은 자동으로 처리됩니다. 이 엔드포인트는 더 이상 사용되지 않습니다."
                    .to_string()
            }
            _ => SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Http(e) => {
                tracing::error!(error = %e, "Auth service request failed");
            }
            AuthError::Upstream(msg) => {
                tracing::error!(message = %msg, "Auth service returned an error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().with_source(self).into_response()
    }
}
