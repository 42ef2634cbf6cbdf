use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;

use crate::assets::{FALLBACK_SCRIPT, FALLBACK_STYLESHEET};
use crate::models::AppState;
use crate::handlers;

pub fn build_router(state: AppState) -> Router {
    // Served from the same paths the manifest and the fallback links point at
    let media = Router::new()
        .route(&format!("/{FALLBACK_STYLESHEET}"), get(handlers::stylesheet_get))
        .route(&format!("/{FALLBACK_SCRIPT}"), get(handlers::script_get))
        .layer(ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        )));

    Router::new()
        .route("/", get(handlers::page_get))
        .route("/module", get(handlers::module_get))
        .merge(media)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
