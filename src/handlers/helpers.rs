use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::assets::WebAssetRegistry;
use crate::models::AppState;
use crate::services::load_render_input;
use crate::view::WarningListView;

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            internal_error()
        }
    }
}

pub fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// Load the configured warnings and render the module into `registry`.
pub fn render_module(state: &AppState, registry: &mut WebAssetRegistry) -> Option<String> {
    let settings = &state.settings;
    let input = load_render_input(&settings.warnings_file, &settings.module_id);
    let view = WarningListView::new(&state.language, &state.dates);
    match view.render(&input, &settings.params, registry) {
        Ok(html) => Some(html),
        Err(e) => {
            tracing::error!(%e, module_id = %settings.module_id, "Failed to render warnings module");
            None
        }
    }
}
