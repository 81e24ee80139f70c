//! Server settings, one file per category.
//!
//! [`ServerSettings`] aggregates all categories and merges partial JSON
//! patches from LSP initialization options and `didChangeConfiguration`
//! payloads into the current values.

pub(crate) mod code_lens;
pub(crate) mod formatting;
pub(crate) mod logging;
pub(crate) mod workspace;

use std::collections::HashMap;

use code_lens::CodeLensSettingsPatch;
pub use code_lens::{CodeLensSettings, DEFAULT_SHOW_REFERENCES_COMMAND};
pub use formatting::FormattingSettings;
use formatting::FormattingSettingsPatch;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use workspace::WorkspaceSettingsPatch;
pub use workspace::{MAX_MAX_FILE_SIZE_KB, MIN_MAX_FILE_SIZE_KB, WorkspaceSettings};

pub const SETTINGS_SECTION_KEY: &str = "frg-analyzer";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerSettings {
    pub formatting: FormattingSettings,
    pub workspace: WorkspaceSettings,
    pub code_lens: CodeLensSettings,
    pub logging: LoggingSettings,
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    /// Apply `payload` on top of `self`. Settings may be sent bare or nested
    /// under [`SETTINGS_SECTION_KEY`]; malformed sections are ignored.
    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            match ServerSettingsPatch::deserialize(candidate) {
                Ok(patch) => merged.apply_patch(patch),
                Err(error) => debug!("Ignoring settings section: {error}"),
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: ServerSettingsPatch,
    ) {
        if let Some(p) = patch.formatting {
            self.formatting.apply_patch(p);
        }
        if let Some(p) = patch.workspace {
            self.workspace.apply_patch(p);
        }
        if let Some(p) = patch.code_lens {
            self.code_lens.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.workspace.normalize();
        self.code_lens.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    formatting: Option<FormattingSettingsPatch>,
    workspace: Option<WorkspaceSettingsPatch>,
    code_lens: Option<CodeLensSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

/// The bare payload first, then the `frg-analyzer` section if present, so
/// the scoped values win.
fn payload_candidates(payload: &Value) -> impl Iterator<Item = &Value> {
    std::iter::once(payload).chain(payload.get(SETTINGS_SECTION_KEY))
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
