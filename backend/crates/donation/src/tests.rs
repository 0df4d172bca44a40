//! Unit tests for the Donation crate

#[cfg(test)]
mod handler_tests {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::DonationConfig;
    use crate::domain::entities::PaymentRecord;
    use crate::domain::repository::DonationRepository;
    use crate::error::{DonationError, DonationResult};
    use crate::presentation::router::donation_router_generic;

    #[derive(Clone, Default)]
    struct FakePayments {
        rows: Vec<PaymentRecord>,
        fail: bool,
        queries: Arc<Mutex<Vec<(String, i64)>>>,
    }

    impl FakePayments {
        fn with_rows(rows: Vec<PaymentRecord>) -> Self {
            Self {
                rows,
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl DonationRepository for FakePayments {
        async fn recent_completed(
            &self,
            campaign_tag: &str,
            limit: i64,
        ) -> DonationResult<Vec<PaymentRecord>> {
            self.queries
                .lock()
                .unwrap()
                .push((campaign_tag.to_string(), limit));
            if self.fail {
                return Err(DonationError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(self.rows.clone())
        }
    }

    fn payment(amount: Option<i64>, name: Option<&str>, day: u32) -> PaymentRecord {
        PaymentRecord {
            amount,
            customer_name: name.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
        }
    }

    fn app(repo: FakePayments) -> Router {
        donation_router_generic(repo, DonationConfig::new("기도터 건축헌금"))
    }

    async fn get_stats(app: Router) -> (StatusCode, Value) {
        let req = Request::get("/stats").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_no_donations() {
        let (status, body) = get_stats(app(FakePayments::default())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "totalAmount": 0,
                "totalCount": 0,
                "recentDonations": []
            })
        );
    }

    #[tokio::test]
    async fn test_totals_over_fetched_rows() {
        let repo = FakePayments::with_rows(vec![
            payment(Some(30_000), Some("박권사"), 3),
            payment(None, None, 2),
            payment(Some(20_000), Some("최장로"), 1),
        ]);

        let (status, body) = get_stats(app(repo)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["totalAmount"], 50_000);
        assert_eq!(body["totalCount"], 3);

        let recent = body["recentDonations"].as_array().unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0]["donorName"], "박권사");
        assert_eq!(recent[1]["donorName"], "익명");
        assert_eq!(recent[1]["amount"], 0);
        assert_eq!(recent[2]["donorName"], "최장로");
        assert!(recent[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_queries_campaign_with_limit() {
        let repo = FakePayments::default();

        get_stats(app(repo.clone())).await;

        let queries = repo.queries.lock().unwrap().clone();
        assert_eq!(queries, vec![("기도터 건축헌금".to_string(), 10)]);
    }

    #[tokio::test]
    async fn test_query_error_masked_as_empty_success() {
        let (status, body) = get_stats(app(FakePayments::failing())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["totalAmount"], 0);
        assert_eq!(body["totalCount"], 0);
        assert_eq!(body["recentDonations"], json!([]));
    }

    #[tokio::test]
    async fn test_overflow_is_500() {
        let repo = FakePayments::with_rows(vec![
            payment(Some(i64::MAX), Some("a"), 2),
            payment(Some(1), Some("b"), 1),
        ]);

        let (status, body) = get_stats(app(repo)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::DonationError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_errors_hide_details() {
        let err = DonationError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_app_error().message().contains("pool"));

        let response = DonationError::Overflow.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
