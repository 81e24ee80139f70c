use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_SHOW_REFERENCES_COMMAND: &str = "editor.action.showReferences";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLensSettings {
    pub enable: bool,
    /// Client command run when a reference-count lens is clicked.
    pub command: String,
}

impl Default for CodeLensSettings {
    fn default() -> Self {
        Self {
            enable: true,
            command: DEFAULT_SHOW_REFERENCES_COMMAND.to_string(),
        }
    }
}

impl CodeLensSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: CodeLensSettingsPatch,
    ) {
        if let Some(v) = patch.enable {
            self.enable = v;
        }
        if let Some(v) = patch.command {
            self.command = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.command = self.command.trim().to_string();
        if self.command.is_empty() {
            self.command = DEFAULT_SHOW_REFERENCES_COMMAND.to_string();
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CodeLensSettingsPatch {
    pub(crate) enable: Option<bool>,
    pub(crate) command: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
