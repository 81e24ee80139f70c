//! Project formatting preferences from `frgfmt.toml`.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tower_lsp::lsp_types::FormattingOptions;
use tracing::debug;

use crate::format::FormatOptions;

const FRGFMT_FILENAME: &str = "frgfmt.toml";

pub const MIN_INDENT_WIDTH: usize = 1;
pub const MAX_INDENT_WIDTH: usize = 16;
const DEFAULT_INDENT_WIDTH: usize = 4;

/// Walks parent directories from `start` looking for `frgfmt.toml`.
pub(crate) fn find_frgfmt_toml(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(FRGFMT_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

pub(crate) fn load_format_options(path: &Path) -> Result<FormatOptions, FormatConfigError> {
    let content = std::fs::read_to_string(path).map_err(|error| FormatConfigError::Read {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    let config: FrgFmtConfig = toml::from_str(&content).map_err(|error| FormatConfigError::Parse {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    if !config.extra.is_empty() {
        debug!("Ignoring unknown {FRGFMT_FILENAME} keys: {:?}", config.extra.keys().collect::<Vec<_>>());
    }
    Ok(config.to_options())
}

/// Formatting options for the file at `source_path`: the nearest
/// `frgfmt.toml`, or the canonical four-space indent when there is none.
pub(crate) fn resolve_format_options(source_path: &Path) -> Result<FormatOptions, FormatConfigError> {
    match find_frgfmt_toml(source_path) {
        Some(toml_path) => load_format_options(&toml_path),
        None => Ok(FormatOptions::default()),
    }
}

/// Indentation taken from the editor's request instead of a project file.
pub(crate) fn editor_format_options(editor: &FormattingOptions) -> FormatOptions {
    let width = (editor.tab_size as usize).clamp(MIN_INDENT_WIDTH, MAX_INDENT_WIDTH);
    FormatOptions::new(width, !editor.insert_spaces)
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FrgFmtConfig {
    indent_width: Option<usize>,
    use_tab: Option<bool>,
    #[serde(flatten)]
    extra: BTreeMap<String, toml::Value>,
}

impl FrgFmtConfig {
    fn to_options(&self) -> FormatOptions {
        let width = self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH).clamp(MIN_INDENT_WIDTH, MAX_INDENT_WIDTH);
        FormatOptions::new(width, self.use_tab.unwrap_or(false))
    }
}

#[derive(Debug)]
pub enum FormatConfigError {
    Read {
        path: PathBuf,
        reason: String,
    },
    Parse {
        path: PathBuf,
        reason: String,
    },
}

impl Display for FormatConfigError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Read {
                path,
                reason,
            } => {
                write!(f, "cannot read {}: {reason}", path.display())
            },
            Self::Parse {
                path,
                reason,
            } => {
                write!(f, "invalid {}: {reason}", path.display())
            },
        }
    }
}

impl std::error::Error for FormatConfigError {}

#[cfg(test)]
#[path = "../../tests/src/server/frgfmt_tests.rs"]
mod tests;
