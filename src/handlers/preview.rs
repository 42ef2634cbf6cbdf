use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::response::{Html, IntoResponse, Response};

use crate::assets::WebAssetRegistry;
use crate::language::KEY_TITLE;
use crate::models::AppState;
use crate::templates::PreviewPageTemplate;
use super::helpers::{internal_error, render_module, render_template};

/// Full page: registry assets in the head, module in the body.
pub async fn page_get(State(state): State<AppState>) -> Response {
    let mut registry = WebAssetRegistry::new(state.manifest.clone());
    let Some(module_html) = render_module(&state, &mut registry) else {
        return internal_error();
    };

    render_template(PreviewPageTemplate {
        lang: state.language.tag().to_string(),
        title: state.language.text(KEY_TITLE),
        head_assets: registry.tags(),
        module_html,
    })
}

/// Module fragment polled by the auto-refresh script.
pub async fn module_get(State(state): State<AppState>) -> Response {
    let mut registry = WebAssetRegistry::new(state.manifest.clone());
    match render_module(&state, &mut registry) {
        Some(html) => ([(CACHE_CONTROL, "no-store")], Html(html)).into_response(),
        None => internal_error(),
    }
}
