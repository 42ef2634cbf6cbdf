pub mod helpers;
pub mod media;
pub mod preview;

pub use media::{script_get, stylesheet_get};
pub use preview::{module_get, page_get};
