//! Unit tests for the Board crate

#[cfg(test)]
mod handler_tests {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::repository::PostViewRepository;
    use crate::error::{BoardError, BoardResult};
    use crate::presentation::router::board_router_generic;

    #[derive(Clone, Default)]
    struct FakeViews {
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl FakeViews {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PostViewRepository for FakeViews {
        async fn increment_view_count(&self, post_id: &str) -> BoardResult<()> {
            self.calls.lock().unwrap().push(post_id.to_string());
            if self.fail {
                Err(BoardError::Database(sqlx::Error::PoolTimedOut))
            } else {
                Ok(())
            }
        }
    }

    async fn post_view(app: Router, id: &str) -> (StatusCode, Value) {
        let req = Request::post(format!("/posts/{id}/view"))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_increment_success() {
        let repo = FakeViews::default();

        let (status, body) = post_view(board_router_generic(repo.clone()), "42").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["message"].is_string());
        assert_eq!(repo.calls(), vec!["42".to_string()]);
    }

    #[tokio::test]
    async fn test_identifier_passed_through_unvalidated() {
        let repo = FakeViews::default();
        let id = "3f2a9c1e-not-really-a-uuid";

        let (status, _) = post_view(board_router_generic(repo.clone()), id).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(repo.calls(), vec![id.to_string()]);
    }

    #[tokio::test]
    async fn test_repeated_calls_increment_again() {
        let repo = FakeViews::default();

        for _ in 0..3 {
            let (status, _) = post_view(board_router_generic(repo.clone()), "7").await;
            assert_eq!(status, StatusCode::OK);
        }

        assert_eq!(repo.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_backend_error_is_500() {
        let repo = FakeViews::failing();

        let (status, body) = post_view(board_router_generic(repo.clone()), "42").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
        assert_eq!(body["success"], false);
        assert_eq!(repo.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_get_not_routed() {
        let req = Request::get("/posts/42/view").body(Body::empty()).unwrap();
        let response = board_router_generic(FakeViews::default())
            .oneshot(req)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::BoardError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_errors_are_500_without_details() {
        let err = BoardError::Database(sqlx::Error::PoolTimedOut);
        assert!(!err.public_message().contains("pool"));

        let app_err = err.to_app_error().with_source(err);
        assert!(std::error::Error::source(&app_err).is_some());

        let response = BoardError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
