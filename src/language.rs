//! Translation strings in the CMS's INI language format.
//!
//! Lookups mirror the CMS text helper: keys are ASCII case-insensitive and a
//! missing key renders as the key exactly as it was asked for, so an
//! incomplete translation never breaks the page.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LanguageError;

/// Prefix shared by all keys owned by the module.
pub const KEY_PREFIX: &str = "MOD_UNWETTERWARNUNG_";

pub const KEY_ACTIVE_WARNINGS: &str = "MOD_UNWETTERWARNUNG_ACTIVE_WARNINGS";
pub const KEY_NO_WARNINGS: &str = "MOD_UNWETTERWARNUNG_NO_WARNINGS";
pub const KEY_SUCCESS: &str = "MOD_UNWETTERWARNUNG_SUCCESS";
pub const KEY_UNKNOWN_EVENT: &str = "MOD_UNWETTERWARNUNG_UNKNOWN_EVENT";
pub const KEY_POWERED_BY: &str = "MOD_UNWETTERWARNUNG_POWERED_BY";
pub const KEY_AUTO_REFRESH: &str = "MOD_UNWETTERWARNUNG_AUTO_REFRESH";
pub const KEY_TITLE: &str = "MOD_UNWETTERWARNUNG";
pub const KEY_ERROR: &str = "ERROR";
pub const KEY_DATE_FORMAT_LC2: &str = "DATE_FORMAT_LC2";

const EN_GB: &str = include_str!("../language/en-GB/mod_unwetterwarnung.ini");
const DE_DE: &str = include_str!("../language/de-DE/mod_unwetterwarnung.ini");

/// Translation key for a severity badge.
///
/// Existing translation files depend on this exact shape:
/// `MOD_UNWETTERWARNUNG_SEVERITY_` followed by the level with ASCII letters
/// uppercased. Other characters pass through unchanged.
pub fn severity_key(severity: &str) -> String {
    format!("{}SEVERITY_{}", KEY_PREFIX, severity.to_ascii_uppercase())
}

/// Strings of one active locale.
#[derive(Debug, Clone, Default)]
pub struct Language {
    tag: String,
    strings: HashMap<String, String>,
}

impl Language {
    /// Load the strings shipped with the crate for `tag` (`en-GB`, `de-DE`).
    pub fn builtin(tag: &str) -> Result<Self, LanguageError> {
        let (tag, source) = match tag.to_ascii_lowercase().as_str() {
            "en-gb" | "en" => ("en-GB", EN_GB),
            "de-de" | "de" => ("de-DE", DE_DE),
            _ => return Err(LanguageError::UnknownLanguage(tag.to_string())),
        };
        let mut language = Self {
            tag: tag.to_string(),
            strings: HashMap::new(),
        };
        language.merge_ini(source)?;
        Ok(language)
    }

    /// Language tag, e.g. `de-DE`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Merge INI source over the current strings; later keys win.
    pub fn merge_ini(&mut self, source: &str) -> Result<(), LanguageError> {
        for (key, value) in parse_ini(source)? {
            self.strings.insert(key, value);
        }
        Ok(())
    }

    pub fn merge_file(&mut self, path: &Path) -> Result<(), LanguageError> {
        let source = fs::read_to_string(path).map_err(|source| LanguageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.merge_ini(&source)
    }

    pub fn has(&self, key: &str) -> bool {
        self.strings.contains_key(&key.to_ascii_uppercase())
    }

    /// Translate `key`, falling back to the key as given.
    pub fn text(&self, key: &str) -> String {
        match self.strings.get(&key.to_ascii_uppercase()) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!(%key, language = %self.tag, "Missing translation");
                key.to_string()
            }
        }
    }
}

fn parse_ini(source: &str) -> Result<Vec<(String, String)>, LanguageError> {
    let mut entries = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim_start_matches('\u{feff}').trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            continue;
        }

        let syntax_error = || LanguageError::Syntax {
            line: idx + 1,
            content: line.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(syntax_error)?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(syntax_error());
        }
        let value = value
            .trim()
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .ok_or_else(syntax_error)?;

        let value = value.replace("\"_QQ_\"", "\"").replace("\\\"", "\"");
        entries.push((key.to_ascii_uppercase(), value));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_languages_load() {
        let en = Language::builtin("en-GB").unwrap();
        let de = Language::builtin("de").unwrap();
        assert_eq!(en.tag(), "en-GB");
        assert_eq!(de.tag(), "de-DE");
        assert_eq!(en.text(KEY_UNKNOWN_EVENT), "Unknown event");
        assert_eq!(de.text(KEY_UNKNOWN_EVENT), "Unbekanntes Ereignis");
    }

    #[test]
    fn test_unknown_language() {
        assert!(matches!(
            Language::builtin("fr-FR"),
            Err(LanguageError::UnknownLanguage(tag)) if tag == "fr-FR"
        ));
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let en = Language::builtin("en-GB").unwrap();
        assert_eq!(en.text("MOD_UNWETTERWARNUNG_NOPE"), "MOD_UNWETTERWARNUNG_NOPE");
        assert_eq!(en.text("mod_unwetterwarnung_nope"), "mod_unwetterwarnung_nope");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let en = Language::builtin("en-GB").unwrap();
        assert_eq!(en.text("date_format_lc2"), "l, d F Y H:i");
    }

    #[test]
    fn test_severity_key() {
        assert_eq!(severity_key("severe"), "MOD_UNWETTERWARNUNG_SEVERITY_SEVERE");
        assert_eq!(severity_key("Extreme"), "MOD_UNWETTERWARNUNG_SEVERITY_EXTREME");
        assert_eq!(severity_key("straße"), "MOD_UNWETTERWARNUNG_SEVERITY_STRAßE");
        assert_eq!(severity_key("größe"), "MOD_UNWETTERWARNUNG_SEVERITY_GRößE");
        let en = Language::builtin("en-GB").unwrap();
        for level in ["minor", "moderate", "severe", "extreme", "info"] {
            assert!(en.has(&severity_key(level)), "missing label for {level}");
        }
    }

    #[test]
    fn test_quotes_and_comments() {
        let mut lang = Language::default();
        lang.merge_ini("; comment\n[section]\nA=\"say \"_QQ_\"hi\"_QQ_\"\"\nb = \"escaped \\\"x\\\"\"\n")
            .unwrap();
        assert_eq!(lang.text("A"), "say \"hi\"");
        assert_eq!(lang.text("B"), "escaped \"x\"");
    }

    #[test]
    fn test_override_wins() {
        let mut lang = Language::builtin("en-GB").unwrap();
        lang.merge_ini("MOD_UNWETTERWARNUNG_POWERED_BY=\"Data by Example Weather\"").unwrap();
        assert_eq!(lang.text(KEY_POWERED_BY), "Data by Example Weather");
    }

    #[test]
    fn test_syntax_errors_report_line() {
        let mut lang = Language::default();
        let err = lang.merge_ini("A=\"ok\"\nnot a pair\n").unwrap_err();
        assert!(matches!(err, LanguageError::Syntax { line: 2, .. }));

        let err = lang.merge_ini("UNQUOTED=value").unwrap_err();
        assert!(matches!(err, LanguageError::Syntax { line: 1, .. }));
    }
}
