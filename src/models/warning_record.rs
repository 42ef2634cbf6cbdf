use serde::Deserialize;

/// One weather warning as prepared by the feed layer.
///
/// Every field is optional; missing values are filled in at render time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WarningRecord {
    pub id: Option<String>,
    pub event: Option<String>,
    /// Open set of levels such as `minor`, `moderate`, `severe`, `extreme`, `info`.
    pub severity: Option<String>,
    pub description: Option<String>,
    pub sender: Option<String>,
    /// Unix timestamp (seconds).
    pub start: Option<i64>,
    /// Unix timestamp (seconds).
    pub end: Option<i64>,
    pub tags: Vec<String>,
}

impl WarningRecord {
    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    pub fn event(&self) -> Option<&str> {
        non_empty(&self.event)
    }

    pub fn severity(&self) -> Option<&str> {
        non_empty(&self.severity)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn sender(&self) -> Option<&str> {
        non_empty(&self.sender)
    }

    /// Start time, treating `0` as unset.
    pub fn start(&self) -> Option<i64> {
        self.start.filter(|ts| *ts != 0)
    }

    /// End time, treating `0` as unset.
    pub fn end(&self) -> Option<i64> {
        self.end.filter(|ts| *ts != 0)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_record() {
        let record: WarningRecord = serde_json::from_str(r#"{"event": "Frost"}"#).unwrap();
        assert_eq!(record.event(), Some("Frost"));
        assert_eq!(record.id(), None);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let record = WarningRecord {
            event: Some(String::new()),
            sender: Some(String::new()),
            start: Some(0),
            end: Some(1_700_000_000),
            ..Default::default()
        };
        assert_eq!(record.event(), None);
        assert_eq!(record.sender(), None);
        assert_eq!(record.start(), None);
        assert_eq!(record.end(), Some(1_700_000_000));
    }
}
