use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingSettings {
    pub enable: bool,
    /// Read indentation from the nearest `frgfmt.toml`. When off, the
    /// editor's `tabSize`/`insertSpaces` from each request are used.
    pub use_project_config: bool,
}

impl Default for FormattingSettings {
    fn default() -> Self {
        Self {
            enable: true,
            use_project_config: true,
        }
    }
}

impl FormattingSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: FormattingSettingsPatch,
    ) {
        if let Some(enable) = patch.enable {
            self.enable = enable;
        }
        if let Some(use_project_config) = patch.use_project_config {
            self.use_project_config = use_project_config;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct FormattingSettingsPatch {
    pub(crate) enable: Option<bool>,
    pub(crate) use_project_config: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
