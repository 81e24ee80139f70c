//! Whole-workspace scan for references to a name.

use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::{
    ide::{IdeLocation, IdeRange},
    navigation::sources::{SourceProvider, SourceSet},
    text_pos::{self, utf16_column_of_byte_offset},
};

/// `^\s*(type|enum)\s+NAME\s+\{`: the line that declares `name`.
pub fn definition_pattern(name: &str) -> Option<Regex> {
    Regex::new(&format!(r"^\s*(type|enum)\s+{}\s+\{{", regex::escape(name))).ok()
}

/// `name` bounded by non-identifier characters on both sides.
pub fn word_pattern(name: &str) -> Option<Regex> {
    if name.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(name))).ok()
}

/// Append every reference to `name` in one file, top to bottom.
pub fn find_in_text(
    path: &Path,
    text: &str,
    name: &str,
    out: &mut Vec<IdeLocation>,
) {
    let (Some(definition), Some(word)) = (definition_pattern(name), word_pattern(name)) else {
        return;
    };

    for (line_index, line) in text_pos::lines(text).enumerate() {
        if definition.is_match(line) {
            continue;
        }
        for found in word.find_iter(line) {
            let range = IdeRange::on_line(
                line_index as u32,
                utf16_column_of_byte_offset(line, found.start()),
                utf16_column_of_byte_offset(line, found.end()),
            );
            out.push(IdeLocation::new(path, range));
        }
    }
}

/// References to `name` across every FRG file, definitions excluded.
///
/// `is_cancelled` is polled before each file; a cancelled scan returns
/// what it has collected so far. Unreadable files are skipped.
pub async fn find_locations(
    name: &str,
    sources: &dyn SourceProvider,
    is_cancelled: &(dyn Fn() -> bool + Send + Sync),
) -> Vec<IdeLocation> {
    let mut locations = Vec::new();
    if name.is_empty() {
        return locations;
    }

    for path in sources.list_files(SourceSet::Frg).await {
        if is_cancelled() {
            debug!("reference scan for '{name}' cancelled with {} hit(s)", locations.len());
            return locations;
        }
        match sources.read_file(&path).await {
            Ok(text) => find_in_text(&path, &text, name, &mut locations),
            Err(error) => warn!("Skipping {}: {error}", path.display()),
        }
    }

    locations
}

#[cfg(test)]
#[path = "../../tests/src/navigation/query_tests.rs"]
mod tests;
