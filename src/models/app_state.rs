use std::sync::Arc;

use crate::assets::AssetManifest;
use crate::config::Settings;
use crate::dates::DateFormatter;
use crate::error::SettingsError;
use crate::language::Language;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub language: Arc<Language>,
    pub dates: DateFormatter,
    /// Shared manifest; every page gets its own registry on top of it.
    pub manifest: Arc<AssetManifest>,
}

impl AppState {
    /// Resolve language, timezone and asset manifest for `settings`.
    pub fn from_settings(settings: Settings) -> Result<Self, SettingsError> {
        let offset = DateFormatter::parse_offset(&settings.utc_offset)
            .ok_or_else(|| SettingsError::InvalidUtcOffset(settings.utc_offset.clone()))?;

        let mut language = Language::builtin(&settings.language)?;
        if let Some(path) = &settings.language_file {
            language.merge_file(path)?;
        }

        Ok(Self {
            language: Arc::new(language),
            dates: DateFormatter::new(offset),
            manifest: Arc::new(AssetManifest::builtin()?),
            settings: Arc::new(settings),
        })
    }
}
