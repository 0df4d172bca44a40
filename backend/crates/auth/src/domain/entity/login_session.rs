//! Login Session
//!
//! Tokens issued by the hosted auth service after a password sign-in.

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_token_response() {
        let json = r#"{
            "access_token": "a.b.c",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": { "id": "7f0c", "email": "member@example.org", "role": "authenticated" }
        }"#;

        let session: LoginSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "a.b.c");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.user.email.as_deref(), Some("member@example.org"));
    }
}
