pub mod properties;

use axum::routing::get;
use axum::Router;

use crate::metrics;
use crate::state::AppState;

/// Build the service router with all routes wired to `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/properties", get(properties::get_properties))
        .route("/healthz", get(|| async { "ok" }))
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::secret_store::InMemorySecretStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config: ServiceConfig = toml::from_str("").unwrap();
        AppState::new(config, Arc::new(InMemorySecretStore::new()))
    }

    #[tokio::test]
    async fn properties_route_serves_json() {
        let response = app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/properties")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("application/json"));
    }

    #[tokio::test]
    async fn healthz_responds_ok() {
        let response = app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn metrics_route_exposes_prometheus_text() {
        let response = app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
