use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde_json::Value;

pub const MIN_MAX_FILE_SIZE_KB: u64 = 16;
pub const MAX_MAX_FILE_SIZE_KB: u64 = 1024 * 64;

const DEFAULT_FRG_EXTENSION: &str = "frg";
const DEFAULT_IMPLEMENTATION_EXTENSION: &str = "go";

/// Which files a workspace scan visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSettings {
    /// Extension of FRG files, without the dot.
    pub frg_extension: String,
    /// Extension of handler implementation files, without the dot.
    pub implementation_extension: String,
    /// Directory names (or root-relative path prefixes) never descended into.
    pub exclude_paths: Vec<String>,
    pub max_file_size_kb: u64,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            frg_extension: DEFAULT_FRG_EXTENSION.to_string(),
            implementation_extension: DEFAULT_IMPLEMENTATION_EXTENSION.to_string(),
            exclude_paths: vec!["node_modules".to_string()],
            max_file_size_kb: 1024,
        }
    }
}

impl WorkspaceSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: WorkspaceSettingsPatch,
    ) {
        if let Some(v) = patch.frg_extension {
            self.frg_extension = v;
        }
        if let Some(v) = patch.implementation_extension {
            self.implementation_extension = v;
        }
        if let Some(v) = patch.exclude_paths {
            self.exclude_paths = v;
        }
        if let Some(v) = patch.max_file_size_kb {
            self.max_file_size_kb = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.frg_extension = normalize_extension(&self.frg_extension, DEFAULT_FRG_EXTENSION);
        self.implementation_extension =
            normalize_extension(&self.implementation_extension, DEFAULT_IMPLEMENTATION_EXTENSION);
        self.max_file_size_kb = self.max_file_size_kb.clamp(MIN_MAX_FILE_SIZE_KB, MAX_MAX_FILE_SIZE_KB);
        let mut seen = HashSet::new();
        self.exclude_paths = self
            .exclude_paths
            .iter()
            .map(|p| p.trim().trim_matches('/').to_string())
            .filter(|p| !p.is_empty())
            .filter(|p| seen.insert(p.clone()))
            .collect();
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_kb.saturating_mul(1024)
    }
}

fn normalize_extension(
    value: &str,
    fallback: &str,
) -> String {
    let trimmed = value.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WorkspaceSettingsPatch {
    pub(crate) frg_extension: Option<String>,
    pub(crate) implementation_extension: Option<String>,
    pub(crate) exclude_paths: Option<Vec<String>>,
    pub(crate) max_file_size_kb: Option<u64>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
