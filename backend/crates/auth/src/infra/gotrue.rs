//! GoTrue Session Store
//!
//! Session store backed by the hosted provider's GoTrue auth API.

use platform::provider::ProviderClient;
use reqwest::StatusCode;
use serde::Serialize;

use crate::domain::entity::login_session::LoginSession;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

const TOKEN_PATH: &str = "/auth/v1/token?grant_type=password";
const LOGOUT_PATH: &str = "/auth/v1/logout?scope=local";

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

/// Hosted auth service client
#[derive(Debug, Clone)]
pub struct GoTrueSessionStore {
    client: ProviderClient,
}

impl GoTrueSessionStore {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

impl SessionStore for GoTrueSessionStore {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<LoginSession> {
        let response = self
            .client
            .post(TOKEN_PATH)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        if is_rejected_grant(status) {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Upstream(format!(
                "token endpoint returned {status}"
            )));
        }

        Ok(response.json::<LoginSession>().await?)
    }

    async fn sign_out(&self, access_token: &str) -> AuthResult<()> {
        let response = self
            .client
            .post(LOGOUT_PATH)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if is_stale_session(status) {
            // Already gone on the provider side; nothing left to revoke.
            tracing::debug!(status = %status, "Session already invalid at sign-out");
            return Ok(());
        }

        Err(AuthError::Upstream(format!(
            "logout endpoint returned {status}"
        )))
    }
}

fn is_rejected_grant(status: StatusCode) -> bool {
    matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED)
}

fn is_stale_session(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_grant_statuses() {
        assert!(is_rejected_grant(StatusCode::BAD_REQUEST));
        assert!(is_rejected_grant(StatusCode::UNAUTHORIZED));
        assert!(!is_rejected_grant(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_rejected_grant(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_stale_session_statuses() {
        assert!(is_stale_session(StatusCode::UNAUTHORIZED));
        assert!(is_stale_session(StatusCode::NOT_FOUND));
        assert!(!is_stale_session(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_password_grant_body() {
        let body = serde_json::to_value(PasswordGrant {
            email: "member@example.org",
            password: "pw",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "email": "member@example.org", "password": "pw" })
        );
    }
}
