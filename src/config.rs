use std::env;
use std::path::{Path, PathBuf};

use crate::models::{RenderParams, DEFAULT_CACHE_TIME};
use crate::utils::{parse_flag, parse_seconds};

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WARNINGS_FILE: &str = "warnings.json";
pub const DEFAULT_MODULE_ID: &str = "1";
pub const DEFAULT_LANGUAGE: &str = "en-GB";
pub const DEFAULT_UTC_OFFSET: &str = "+00:00";
pub const DEFAULT_SHOW_SEVERITY: bool = true;
pub const DEFAULT_AUTO_REFRESH: bool = false;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_warnings_file() -> PathBuf {
    PathBuf::from(non_empty_var("UNWETTER_WARNINGS_FILE").unwrap_or_else(|| DEFAULT_WARNINGS_FILE.to_string()))
}

pub fn get_module_id() -> String {
    non_empty_var("UNWETTER_MODULE_ID").unwrap_or_else(|| DEFAULT_MODULE_ID.to_string())
}

pub fn get_language() -> String {
    non_empty_var("UNWETTER_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Optional INI file merged over the built-in strings.
pub fn get_language_file() -> Option<PathBuf> {
    non_empty_var("UNWETTER_LANGUAGE_FILE").map(PathBuf::from)
}

pub fn get_utc_offset() -> String {
    non_empty_var("UNWETTER_UTC_OFFSET").unwrap_or_else(|| DEFAULT_UTC_OFFSET.to_string())
}

pub fn get_show_severity() -> bool {
    parse_flag(env::var("UNWETTER_SHOW_SEVERITY").ok().as_deref(), DEFAULT_SHOW_SEVERITY)
}

pub fn get_auto_refresh() -> bool {
    parse_flag(env::var("UNWETTER_AUTO_REFRESH").ok().as_deref(), DEFAULT_AUTO_REFRESH)
}

/// Cache lifetime in seconds; unparsable values fall back to the default.
pub fn get_cache_time() -> u32 {
    parse_seconds(env::var("UNWETTER_CACHE_TIME").ok().as_deref()).unwrap_or(DEFAULT_CACHE_TIME)
}

pub fn get_render_params() -> RenderParams {
    RenderParams {
        show_severity: get_show_severity(),
        auto_refresh: get_auto_refresh(),
        cache_time: get_cache_time(),
    }
}

/// Everything the binary needs to build its state, resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub warnings_file: PathBuf,
    pub module_id: String,
    pub params: RenderParams,
    pub language: String,
    pub language_file: Option<PathBuf>,
    pub utc_offset: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            warnings_file: get_warnings_file(),
            module_id: get_module_id(),
            params: get_render_params(),
            language: get_language(),
            language_file: get_language_file(),
            utc_offset: get_utc_offset(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
