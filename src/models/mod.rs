pub mod warning_record;
pub mod render_params;
pub mod render_input;
pub mod app_state;

pub use warning_record::WarningRecord;
pub use render_params::{RenderParams, DEFAULT_CACHE_TIME, MAX_REFRESH_INTERVAL_MS};
pub use render_input::{RenderInput, DOM_ID_PREFIX};
pub use app_state::AppState;
