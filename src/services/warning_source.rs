use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::WarningSourceError;
use crate::models::{RenderInput, WarningRecord};

/// Accepted file layouts: a bare list, or an object with a `warnings` list.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum WarningsFile {
    List(Vec<WarningRecord>),
    Wrapped { warnings: Vec<WarningRecord> },
}

impl WarningsFile {
    fn into_records(self) -> Vec<WarningRecord> {
        match self {
            WarningsFile::List(records) => records,
            WarningsFile::Wrapped { warnings } => warnings,
        }
    }
}

/// Read prepared warning records from a JSON file.
pub fn load_warnings_file(path: &Path) -> Result<Vec<WarningRecord>, WarningSourceError> {
    let raw = fs::read_to_string(path).map_err(|source| WarningSourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file: WarningsFile = serde_json::from_str(&raw).map_err(|source| WarningSourceError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(file.into_records())
}

/// Build the view input for `module_id`, turning a load failure into the error state.
pub fn load_render_input(path: &Path, module_id: &str) -> RenderInput {
    let input = RenderInput::new(module_id);
    match load_warnings_file(path) {
        Ok(warnings) => {
            tracing::debug!(count = warnings.len(), path = %path.display(), "Loaded warnings");
            input.with_warnings(warnings)
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to load warnings");
            input.with_error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_bare_list() {
        let file = write_temp(r#"[{"event": "Sturmböen"}, {"id": "b"}]"#);
        let records = load_warnings_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event(), Some("Sturmböen"));
    }

    #[test]
    fn test_wrapped_list() {
        let file = write_temp(r#"{"warnings": [{"severity": "severe", "tags": ["WIND"]}]}"#);
        let records = load_warnings_file(file.path()).unwrap();
        assert_eq!(records[0].tags, vec!["WIND".to_string()]);
    }

    #[test]
    fn test_missing_file_becomes_error_state() {
        let dir = tempfile::tempdir().unwrap();
        let input = load_render_input(&dir.path().join("absent.json"), "3");
        assert!(input.warnings.is_empty());
        assert!(input.error().is_some_and(|e| e.contains("absent.json")));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_temp("{not json");
        assert!(matches!(
            load_warnings_file(file.path()),
            Err(WarningSourceError::Parse { .. })
        ));
    }
}
