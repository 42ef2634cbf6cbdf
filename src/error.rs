/// Error types shared across the crate
use thiserror::Error;

use crate::assets::AssetKind;

/// Errors raised while loading language strings
#[derive(Debug, Error)]
pub enum LanguageError {
    /// A line that is neither a comment, a section nor `KEY="value"`
    #[error("Syntax error in language file on line {line}: {content}")]
    Syntax {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// No built-in strings exist for the requested language tag
    #[error("No built-in language for tag: {0}")]
    UnknownLanguage(String),

    /// The override file could not be read
    #[error("Failed to read language file {path}: {source}")]
    Io {
        /// Path of the override file
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the web asset registry
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset name is not declared in the manifest
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    /// The asset exists but was requested as the wrong kind
    #[error("Asset {name} is not a {expected:?} asset")]
    WrongKind { name: String, expected: AssetKind },

    /// The manifest JSON is malformed
    #[error("Invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Errors raised while producing markup
#[derive(Debug, Error)]
pub enum ViewError {
    /// The askama template failed to render
    #[error("Template render error: {0}")]
    Template(#[from] askama::Error),
}

/// Errors raised while reading warning records from disk
#[derive(Debug, Error)]
pub enum WarningSourceError {
    /// The warnings file could not be read
    #[error("Could not read warnings from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a warning list or an object with a `warnings` list
    #[error("Could not parse warnings in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while turning settings into application state
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `UNWETTER_UTC_OFFSET` is not of the form `+HH:MM`
    #[error("Invalid UTC offset: {0}")]
    InvalidUtcOffset(String),

    /// Language strings could not be loaded
    #[error(transparent)]
    Language(#[from] LanguageError),

    /// The asset manifest could not be loaded
    #[error(transparent)]
    Asset(#[from] AssetError),
}
