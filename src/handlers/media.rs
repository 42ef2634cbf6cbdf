use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

// Embed the module bundle in the binary
const STYLESHEET: &str = include_str!("../../media/mod_unwetterwarnung/css/mod_unwetterwarnung.css");
const SCRIPT: &str = include_str!("../../media/mod_unwetterwarnung/js/mod_unwetterwarnung.js");

pub async fn stylesheet_get() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn script_get() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_REFRESH_INTERVAL_MS;

    #[test]
    fn test_script_caps_interval_like_server() {
        let bound = format!("{:#x}", MAX_REFRESH_INTERVAL_MS);
        assert_eq!(bound, "0x7fffffff");
        assert!(SCRIPT.contains(&format!("const MAX_INTERVAL_MS = {bound};")));
        assert!(SCRIPT.contains("intervalMs = Math.min(intervalMs, MAX_INTERVAL_MS);"));
    }
}
