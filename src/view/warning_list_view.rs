use askama::Template;

use crate::assets::{AssetManager, AssetTag, SCRIPT_ASSET, STYLE_ASSET};
use crate::dates::DateFormatter;
use crate::error::ViewError;
use crate::language::{self, Language};
use crate::models::{RenderInput, RenderParams, WarningRecord};
use crate::templates::{
    ErrorAlert, RefreshScript, SeverityBadge, SuccessAlert, TimeLabel, ViewState, WarningItem,
    WarningListTemplate, WarningsPanel,
};
use crate::utils::{js_string_literal, truncate_words, IdGenerator};

/// Descriptions longer than this many characters are shortened.
pub const DESCRIPTION_LIMIT: usize = 200;

/// Prefix of ids generated for records without one.
pub const GENERATED_ID_PREFIX: &str = "warning_";

const BASE_CLASS: &str = "mod-unwetterwarnung mod-unwetterwarnung-default";
const DEFAULT_SEVERITY_CLASS: &str = "info";

/// Renders a module instance from already prepared warnings.
///
/// Rendering is a pure function of its inputs apart from one call into the
/// [`AssetManager`], whose failure is answered with direct asset links.
pub struct WarningListView<'a> {
    language: &'a Language,
    dates: &'a DateFormatter,
}

impl<'a> WarningListView<'a> {
    pub fn new(language: &'a Language, dates: &'a DateFormatter) -> Self {
        Self { language, dates }
    }

    pub fn render(
        &self,
        input: &RenderInput,
        params: &RenderParams,
        assets: &mut dyn AssetManager,
    ) -> Result<String, ViewError> {
        let has_warnings = !input.warnings.is_empty();

        let fallback_assets = if has_warnings || params.auto_refresh {
            register_assets(assets)
        } else {
            Vec::new()
        };

        let refresh = params.auto_refresh.then(|| RefreshScript {
            scope_id: js_string_literal(&input.dom_id()),
            interval_ms: params.refresh_interval_ms(),
        });

        let template = WarningListTemplate {
            container_class: container_class(has_warnings, params.auto_refresh),
            dom_id: input.dom_id(),
            state: self.select_state(input, params),
            fallback_assets,
            refresh,
        };
        Ok(template.render()?)
    }

    fn select_state(&self, input: &RenderInput, params: &RenderParams) -> ViewState {
        if let Some(message) = input.error() {
            return ViewState::Error(ErrorAlert {
                label: self.language.text(language::KEY_ERROR),
                message: message.to_string(),
            });
        }

        if input.warnings.is_empty() {
            return ViewState::Empty(SuccessAlert {
                label: self.language.text(language::KEY_SUCCESS),
                message: self.language.text(language::KEY_NO_WARNINGS),
            });
        }

        let mut ids = IdGenerator::new(GENERATED_ID_PREFIX);
        let items = input
            .warnings
            .iter()
            .map(|warning| self.item(warning, params, &mut ids))
            .collect();

        ViewState::Warnings(WarningsPanel {
            title: self.language.text(language::KEY_ACTIVE_WARNINGS),
            items,
            powered_by: self.language.text(language::KEY_POWERED_BY),
            auto_refresh_notice: params
                .auto_refresh
                .then(|| self.language.text(language::KEY_AUTO_REFRESH)),
        })
    }

    fn item(&self, warning: &WarningRecord, params: &RenderParams, ids: &mut IdGenerator) -> WarningItem {
        let severity_badge = match warning.severity() {
            Some(severity) if params.show_severity => Some(SeverityBadge {
                severity: severity.to_string(),
                label: self.language.text(&language::severity_key(severity)),
            }),
            _ => None,
        };

        WarningItem {
            id: match warning.id() {
                Some(id) => id.to_string(),
                None => ids.next_id(),
            },
            severity_class: warning.severity().unwrap_or(DEFAULT_SEVERITY_CLASS).to_string(),
            severity_badge,
            title: match warning.event() {
                Some(event) => event.to_string(),
                None => self.language.text(language::KEY_UNKNOWN_EVENT),
            },
            description: warning
                .description()
                .map(|text| truncate_words(text, DESCRIPTION_LIMIT)),
            sender: warning.sender().map(str::to_string),
            start: warning.start().and_then(|ts| self.time_label(ts)),
            end: warning.end().and_then(|ts| self.time_label(ts)),
            tags: warning.tags.clone(),
        }
    }

    fn time_label(&self, timestamp: i64) -> Option<TimeLabel> {
        let pattern = self.language.text(language::KEY_DATE_FORMAT_LC2);
        Some(TimeLabel {
            iso: self.dates.iso8601(timestamp)?,
            display: self.dates.format(timestamp, &pattern, self.language)?,
        })
    }
}

fn container_class(has_warnings: bool, auto_refresh: bool) -> String {
    let mut class = BASE_CLASS.to_string();
    if has_warnings {
        class.push_str(" has-warnings");
    }
    if auto_refresh {
        class.push_str(" auto-refresh");
    }
    class
}

/// Ask the registry for the module bundle; link whatever it rejects directly.
fn register_assets(assets: &mut dyn AssetManager) -> Vec<AssetTag> {
    let mut fallback = Vec::new();
    if let Err(e) = assets.use_script(SCRIPT_ASSET) {
        tracing::warn!(%e, asset = SCRIPT_ASSET, "Asset registry rejected module script, linking it directly");
        fallback.push(AssetTag::fallback_script());
    }
    if let Err(e) = assets.use_style(STYLE_ASSET) {
        tracing::warn!(%e, asset = STYLE_ASSET, "Asset registry rejected module stylesheet, linking it directly");
        fallback.insert(0, AssetTag::fallback_style());
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_class_flags_are_independent() {
        assert_eq!(container_class(false, false), BASE_CLASS);
        assert_eq!(container_class(true, false), format!("{BASE_CLASS} has-warnings"));
        assert_eq!(container_class(false, true), format!("{BASE_CLASS} auto-refresh"));
        assert_eq!(
            container_class(true, true),
            format!("{BASE_CLASS} has-warnings auto-refresh")
        );
    }
}
