pub mod warning_source;

pub use warning_source::{load_render_input, load_warnings_file};
