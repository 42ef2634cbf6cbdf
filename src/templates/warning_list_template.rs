use askama::Template;

use crate::assets::AssetTag;

/// Markup of one module instance.
#[derive(Template)]
#[template(path = "warning_list.html")]
pub struct WarningListTemplate {
    pub container_class: String,
    pub dom_id: String,
    pub state: ViewState,
    /// Direct asset links, only set when the registry could not take them.
    pub fallback_assets: Vec<AssetTag>,
    pub refresh: Option<RefreshScript>,
}

/// The three mutually exclusive render states.
pub enum ViewState {
    Error(ErrorAlert),
    Empty(SuccessAlert),
    Warnings(WarningsPanel),
}

pub struct ErrorAlert {
    pub label: String,
    pub message: String,
}

pub struct SuccessAlert {
    pub label: String,
    pub message: String,
}

pub struct WarningsPanel {
    pub title: String,
    pub items: Vec<WarningItem>,
    pub powered_by: String,
    pub auto_refresh_notice: Option<String>,
}

/// Display-ready warning; all strings are raw and escaped by the template.
pub struct WarningItem {
    pub id: String,
    pub severity_class: String,
    pub severity_badge: Option<SeverityBadge>,
    pub title: String,
    pub description: Option<String>,
    pub sender: Option<String>,
    pub start: Option<TimeLabel>,
    pub end: Option<TimeLabel>,
    pub tags: Vec<String>,
}

pub struct SeverityBadge {
    pub severity: String,
    pub label: String,
}

pub struct TimeLabel {
    pub iso: String,
    pub display: String,
}

pub struct RefreshScript {
    /// Already a JavaScript string literal.
    pub scope_id: String,
    pub interval_ms: u64,
}
