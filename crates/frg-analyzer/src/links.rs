//! Clickable `import "path"` targets.

use std::path::{Path, PathBuf};

use crate::{
    ide::IdeRange,
    syntax::patterns::IMPORT_ANYWHERE,
    text_pos::{self, utf16_column_of_byte_offset},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLink {
    /// The quoted path, without the quotes.
    pub range: IdeRange,
    pub target: PathBuf,
}

/// Every import on every line, with targets resolved against `base_dir`
/// (the importing document's directory). Targets are not checked for
/// existence.
pub fn import_links(
    text: &str,
    base_dir: &Path,
) -> Vec<ImportLink> {
    let mut links = Vec::new();
    for (line_index, line) in text_pos::lines(text).enumerate() {
        for caps in IMPORT_ANYWHERE.captures_iter(line) {
            let Some(path) = caps.get(1) else {
                continue;
            };
            links.push(ImportLink {
                range: IdeRange::on_line(
                    line_index as u32,
                    utf16_column_of_byte_offset(line, path.start()),
                    utf16_column_of_byte_offset(line, path.end()),
                ),
                target: base_dir.join(path.as_str()),
            });
        }
    }
    links
}

#[cfg(test)]
#[path = "../tests/src/links_tests.rs"]
mod tests;
