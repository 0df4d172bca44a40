//! PostgreSQL Audit Sink

use sqlx::PgPool;
use sqlx::types::Json;

use crate::domain::entity::audit_entry::AuthAuditEntry;
use crate::domain::repository::AuditSink;
use crate::error::AuthResult;

/// Writes audit entries into `auth_audit_logs`
#[derive(Clone)]
pub struct PgAuditSink {
    pool: PgPool,
}

impl PgAuditSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AuditSink for PgAuditSink {
    async fn write(&self, entry: &AuthAuditEntry) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_audit_logs (
                email,
                action,
                ip_address,
                user_agent,
                details,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&entry.email)
        .bind(entry.action.as_str())
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .bind(Json(&entry.details))
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
