//! HTTP API Layer
//!
//! This crate provides the REST API for the supplier backend using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `POST /supplier`, `POST /suppliers`, and the health probes
//! - **Middleware**: trace id assignment and request logging
//! - **DTOs**: the `{status, message, data}` response envelope
//! - **Error Handling**: localized error envelopes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_supplier::SupplierService;

use crate::config::ApiConfig;
use crate::middleware::request_logging_middleware;
use crate::handlers::{health, supplier};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: SupplierService,
    pub config: ApiConfig,
}

/// Creates the main API router
pub fn create_router(service: SupplierService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    Router::new()
        .route("/", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/supplier", post(supplier::create_supplier))
        .route("/suppliers", post(supplier::list_suppliers))
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use domain_supplier::MockSupplierPort;
    use tower::ServiceExt;

    fn app() -> Router {
        let service = SupplierService::new(Arc::new(MockSupplierPort::new()));
        create_router(service, ApiConfig::default())
    }

    #[tokio::test]
    async fn test_root_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-trace-id"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"message":"Health Check OK"}"#);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
