// Parsing utilities
pub mod parse_flag;
pub mod parse_seconds;

// Rendering helpers
pub mod truncate;
pub mod id_generator;
pub mod js_literal;

// Re-export all utilities for convenient access
pub use parse_flag::parse_flag;
pub use parse_seconds::parse_seconds;
pub use truncate::{truncate_words, ELLIPSIS};
pub use id_generator::IdGenerator;
pub use js_literal::js_string_literal;
