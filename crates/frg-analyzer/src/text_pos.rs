//! Column arithmetic shared by every line-oriented scan.
//!
//! Scans work on byte offsets (what `regex` reports) while results are
//! expressed in UTF-16 columns (what LSP clients expect).

/// Iterate the lines of `text`, splitting on `\n` only and dropping a
/// trailing `\r`. A trailing newline yields a final empty line, so line
/// numbers match what an editor shows.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

pub fn utf16_column_of_byte_offset(
    line: &str,
    byte_offset: usize,
) -> u32 {
    let mut end = byte_offset.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line[..end].encode_utf16().count() as u32
}

pub fn utf16_len(line: &str) -> u32 {
    line.encode_utf16().count() as u32
}

/// Byte offset of a UTF-16 column, clamped to the end of the line.
pub fn byte_offset_of_utf16_column(
    line: &str,
    column: u32,
) -> usize {
    let mut utf16_offset = 0u32;
    for (byte_offset, ch) in line.char_indices() {
        if utf16_offset >= column {
            return byte_offset;
        }
        utf16_offset += ch.len_utf16() as u32;
    }
    line.len()
}

/// Byte span of the identifier (`[A-Za-z0-9_]+`) touching `column`.
///
/// A cursor sitting just after the last character still selects the word.
pub fn word_span_at(
    line: &str,
    column: u32,
) -> Option<(usize, usize)> {
    let offset = byte_offset_of_utf16_column(line, column);
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';

    let start = line[..offset]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_ident(*c))
        .last()
        .map_or(offset, |(index, _)| index);
    let end = line[offset..].char_indices().find(|(_, c)| !is_ident(*c)).map_or(line.len(), |(index, _)| offset + index);

    (start < end).then_some((start, end))
}

/// The identifier under `column`, if any.
pub fn word_at(
    line: &str,
    column: u32,
) -> Option<&str> {
    word_span_at(line, column).map(|(start, end)| &line[start..end])
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
