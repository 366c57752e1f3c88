//! HTTP surface over the scheme registry.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/schemes", get(routes::schemes::list_schemes))
        .route("/schemes/{key}", get(routes::schemes::get_scheme_detail))
        .route(
            "/schemes/{key}/validate",
            post(routes::schemes::validate_answers),
        )
        .route(
            "/schemes/{key}/evaluate",
            post(routes::schemes::evaluate_answers),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors),
        )
}
