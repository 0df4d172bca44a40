//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entities::PaymentRecord;
use crate::domain::repository::DonationRepository;
use crate::error::DonationResult;

/// PostgreSQL-backed donation repository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DonationRepository for PgDonationRepository {
    async fn recent_completed(
        &self,
        campaign_tag: &str,
        limit: i64,
    ) -> DonationResult<Vec<PaymentRecord>> {
        let rows = sqlx::query_as::<_, PaymentRecord>(
            r#"
            SELECT
                amount,
                customer_name,
                created_at
            FROM payments
            WHERE status = 'completed'
              AND order_name = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(campaign_tag)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
