//! HTTP boundary for the task API.
//!
//! Translates wire requests and responses to and from task service
//! calls. Routing, CORS, and request tracing live here; everything with
//! designed behaviour is delegated to [`crate::task`].

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiErrorResponse;
pub use handlers::SharedTaskService;

use crate::task::ports::TaskRepository;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use mockable::Clock;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router over a shared task service.
///
/// Wires the five task routes, both liveness paths, a JSON 404 fallback
/// for unmatched routes, request tracing, and the given CORS policy.
#[must_use]
pub fn router<R, C>(service: SharedTaskService<R, C>, cors: CorsLayer) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route("/health", get(handlers::health_check::<R, C>))
        .route("/healthz", get(handlers::health_check::<R, C>))
        .fallback(handlers::endpoint_not_found)
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Builds the CORS policy from the configured origin allow-list.
///
/// An empty allow-list admits any origin; requests without an `Origin`
/// header (curl, health probes) are unaffected either way.
#[must_use]
pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if allowed_origins.is_empty() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        layer.allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
    }
}
