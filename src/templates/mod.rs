// Module markup
pub mod warning_list_template;
pub use warning_list_template::{
    ErrorAlert, RefreshScript, SeverityBadge, SuccessAlert, TimeLabel, ViewState, WarningItem,
    WarningListTemplate, WarningsPanel,
};

// Standalone page wrapping the module
pub mod preview_page_template;
pub use preview_page_template::PreviewPageTemplate;
