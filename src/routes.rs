use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home_get))
        .route("/users/:name", get(handlers::pages::user_get))
        .route("/updates/new", get(handlers::pages::new_update_get))
        .route("/overrides/new", get(handlers::pages::new_override_get))
        .route("/stacks/new", get(handlers::pages::new_stack_get))
        .route("/metrics", get(handlers::metrics::metrics_get))
        // Serve static files with cache-control header
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new(static_dir)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
