//! Anchors for "N references" code lenses.

use crate::{
    ide::IdeRange,
    syntax::patterns::DEFINITION_ANY,
    text_pos::{self, utf16_column_of_byte_offset},
};

/// A `type|enum NAME {` declaration, with the range of `NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LensAnchor {
    pub name: String,
    pub range: IdeRange,
}

pub fn lens_anchors(text: &str) -> Vec<LensAnchor> {
    text_pos::lines(text)
        .enumerate()
        .filter_map(|(line_index, line)| {
            let name = DEFINITION_ANY.captures(line)?.get(2)?;
            Some(LensAnchor {
                name: name.as_str().to_string(),
                range: IdeRange::on_line(
                    line_index as u32,
                    utf16_column_of_byte_offset(line, name.start()),
                    utf16_column_of_byte_offset(line, name.end()),
                ),
            })
        })
        .collect()
}

/// `"<n> references"`.
pub fn lens_title(count: usize) -> String {
    format!("{count} references")
}

#[cfg(test)]
#[path = "../tests/src/lens_tests.rs"]
mod tests;
