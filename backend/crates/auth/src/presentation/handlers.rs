//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use platform::client::RequestMeta;
use platform::cookie::{bearer_token, extract_cookie};

use crate::application::config::AuthConfig;
use crate::application::{AuditLogger, SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, MessageResponse};

const LOGIN_MESSAGE: &str = "로그인되었습니다.";
const LOGOUT_MESSAGE: &str = "로그아웃되었습니다.";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub audit: AuditLogger,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| AuthError::InvalidRequest(e.body_text()))?;
    let meta = RequestMeta::from_headers(&headers);

    let use_case = SignInUseCase::new(state.store.clone(), state.audit.clone());
    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let session = use_case.execute(input, &meta).await?;

    let access = state
        .config
        .access_cookie()
        .build_set_cookie(&session.access_token, session.expires_in);
    let refresh = state.config.refresh_cookie().build_set_cookie(
        &session.refresh_token,
        state.config.refresh_cookie_ttl_secs(),
    );

    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, access), (header::SET_COOKIE, refresh)]),
        Json(LoginResponse {
            success: true,
            message: LOGIN_MESSAGE.to_string(),
            user: session.user,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Always 200: a failing session store is logged, not surfaced.
pub async fn logout<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let meta = RequestMeta::from_headers(&headers);
    let token = extract_cookie(&headers, &state.config.access_cookie_name)
        .or_else(|| bearer_token(&headers));

    let use_case = SignOutUseCase::new(state.store.clone(), state.audit.clone());
    use_case.execute(token.as_deref(), &meta).await;

    let clear_access = state.config.access_cookie().build_delete_cookie();
    let clear_refresh = state.config.refresh_cookie().build_delete_cookie();

    (
        StatusCode::OK,
        AppendHeaders([
            (header::SET_COOKIE, clear_access),
            (header::SET_COOKIE, clear_refresh),
        ]),
        Json(MessageResponse::ok(LOGOUT_MESSAGE)),
    )
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
///
/// Retired. Token refresh belongs to the hosted provider's client-side
/// session handling, so this answers 410 whatever the request carries.
pub async fn refresh() -> AuthError {
    AuthError::RefreshDisabled
}
