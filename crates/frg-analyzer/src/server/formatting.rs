use tower_lsp::lsp_types::{Range, TextEdit};

use crate::{
    document::Document,
    format::{FormatOptions, format_frg},
};

/// Whole-document edit, or `None` when the text is already formatted.
pub(crate) fn format_document(
    document: &Document,
    options: &FormatOptions,
) -> Option<TextEdit> {
    let formatted = format_frg(&document.text, options);
    if formatted == document.text {
        return None;
    }

    Some(TextEdit {
        range: document.full_range(),
        new_text: formatted,
    })
}

/// Format the selected text on its own and replace exactly that range.
///
/// A selection that does not end in a newline gets none appended, so the
/// text after the range stays on the same line.
pub(crate) fn format_range(
    document: &Document,
    range: Range,
    options: &FormatOptions,
) -> Option<TextEdit> {
    let selected = document.text_in(range)?;
    let mut formatted = format_frg(selected, options);
    if !selected.ends_with('\n') && formatted.ends_with('\n') {
        formatted.pop();
    }
    if formatted == selected {
        return None;
    }

    Some(TextEdit {
        range,
        new_text: formatted,
    })
}

#[cfg(test)]
#[path = "../../tests/src/server/formatting_tests.rs"]
mod tests;
