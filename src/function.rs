use crate::app::api_router;
use crate::config::Config;
use crate::state::{AppState, LazyStore};
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;

/// Function-invocation adapter for the keyword API.
///
/// The platform keeps one adapter alive per warm instance and calls
/// [`invoke`](FunctionAdapter::invoke) once per request. The store connection
/// is established lazily by the first request that needs it and reused by
/// every later invocation; a recycled instance starts over with an empty
/// cell. Route logic is the same [`api_router`] the server binary mounts.
#[derive(Clone)]
pub struct FunctionAdapter {
    router: Router,
}

impl FunctionAdapter {
    pub fn new(config: Config) -> Self {
        let state = AppState {
            store: LazyStore::new(),
            config: Arc::new(config),
        };
        Self {
            router: api_router(state),
        }
    }

    /// Dispatch a single request and return its response.
    pub async fn invoke(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|err| match err {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeywordResponse;
    use crate::test_support::{emulator_config, emulator_store, lock_env};
    use axum::http::StatusCode;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_unsupported_method_is_405_without_a_store() {
        let adapter = FunctionAdapter::new(emulator_config("fn-offline", "fn-offline-db"));

        let response = adapter
            .invoke(
                Request::builder()
                    .method("PUT")
                    .uri("/api/keywords")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_full_lifecycle_through_invocations() {
        let _guard = lock_env();
        // Probe the emulator (and provision) before building the adapter.
        let Some((config, _store)) = emulator_store("fn-lifecycle", "fn-lifecycle-db").await
        else {
            return;
        };

        let adapter = FunctionAdapter::new(config);
        let text = format!("bitcoin-{}", Uuid::new_v4());

        // First invocation connects lazily
        let response = adapter
            .invoke(
                Request::builder()
                    .method("POST")
                    .uri("/api/keywords")
                    .header("content-type", "application/json")
                    .body(Body::from(format!(r#"{{"text":"{}"}}"#, text)))
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: KeywordResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.text, text);
        assert_eq!(created.alert_count, 0);

        // Later invocations reuse the memoized connection
        let response = adapter
            .invoke(
                Request::builder()
                    .method("GET")
                    .uri("/api/keywords")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let keywords: Vec<KeywordResponse> = serde_json::from_slice(&body).unwrap();
        assert!(keywords.iter().any(|k| k.id == created.id));

        // Delete via query string, the form function-style callers use
        let response = adapter
            .invoke(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/keywords?id={}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = adapter
            .invoke(
                Request::builder()
                    .method("GET")
                    .uri("/api/keywords")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let keywords: Vec<KeywordResponse> = serde_json::from_slice(&body).unwrap();
        assert!(keywords.iter().all(|k| k.id != created.id));
    }
}
