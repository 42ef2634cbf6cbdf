pub mod warning_list_view;

pub use warning_list_view::{WarningListView, DESCRIPTION_LIMIT, GENERATED_ID_PREFIX};
