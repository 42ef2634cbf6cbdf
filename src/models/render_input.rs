use crate::models::WarningRecord;

/// Prefix of the container element id, shared with the client script.
pub const DOM_ID_PREFIX: &str = "mod-unwetterwarnung-";

/// Data for one render pass, fully resolved by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderInput {
    /// Upstream failure message; preempts everything else when non-empty.
    pub error: Option<String>,
    pub warnings: Vec<WarningRecord>,
    /// Opaque module instance id used to scope DOM ids.
    pub module_id: String,
}

impl RenderInput {
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            ..Default::default()
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<WarningRecord>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn dom_id(&self) -> String {
        format!("{}{}", DOM_ID_PREFIX, self.module_id)
    }
}
