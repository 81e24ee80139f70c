use tower_lsp::lsp_types::*;

use crate::text_pos;

/// Snapshot of a single open FRG document.
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: Url,
    /// Full source text (always kept up-to-date).
    pub text: String,
    /// Document version as reported by the client.
    pub version: i32,
    /// Line start byte offsets, rebuilt on every mutation.
    line_offsets: Vec<usize>,
}

impl Document {
    pub fn new(
        uri: Url,
        text: String,
        version: i32,
    ) -> Self {
        let line_offsets = Self::compute_line_offsets(&text);
        Self {
            uri,
            text,
            version,
            line_offsets,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Text of a 0-based line without its line terminator.
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_offsets.get(line)?;
        let end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        let slice = &self.text[start..end];
        Some(slice.trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// Byte offset of an LSP position. Columns past the end of a line clamp
    /// to the line end; a line past the end of the text yields `None`.
    pub fn offset_of(
        &self,
        pos: Position,
    ) -> Option<usize> {
        let line_start = *self.line_offsets.get(pos.line as usize)?;
        let line_text = self.line_text(pos.line as usize)?;
        Some(line_start + text_pos::byte_offset_of_utf16_column(line_text, pos.character))
    }

    pub fn position_of(
        &self,
        offset: usize,
    ) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        let line = match self.line_offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        let line_start = self.line_offsets[line];
        Position {
            line: line as u32,
            character: text_pos::utf16_len(&self.text[line_start..offset]),
        }
    }

    /// Range spanning the whole text.
    pub fn full_range(&self) -> Range {
        Range {
            start: Position::new(0, 0),
            end: self.position_of(self.text.len()),
        }
    }

    /// Text covered by `range`, or `None` when it starts outside the text.
    pub fn text_in(
        &self,
        range: Range,
    ) -> Option<&str> {
        let start = self.offset_of(range.start)?;
        let end = self.offset_of(range.end).unwrap_or(self.text.len()).max(start);
        Some(&self.text[start..end])
    }

    /// The identifier (`[A-Za-z0-9_]+`) under `pos` and its range.
    pub fn word_at(
        &self,
        pos: Position,
    ) -> Option<(String, Range)> {
        let line_text = self.line_text(pos.line as usize)?;
        let (start, end) = text_pos::word_span_at(line_text, pos.character)?;
        let range = Range {
            start: Position::new(pos.line, text_pos::utf16_column_of_byte_offset(line_text, start)),
            end: Position::new(pos.line, text_pos::utf16_column_of_byte_offset(line_text, end)),
        };
        Some((line_text[start..end].to_string(), range))
    }

    // ── mutations ───────────────────────────────────────────────────────

    pub fn set_content(
        &mut self,
        text: String,
        version: i32,
    ) {
        self.text = text;
        self.version = version;
        self.line_offsets = Self::compute_line_offsets(&self.text);
    }

    /// Apply incremental or full-content changes in order, then bump the
    /// version. A change whose range falls outside the text is dropped.
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        for change in changes {
            if let Some(range) = change.range {
                if let (Some(start), Some(end)) = (self.offset_of(range.start), self.offset_of(range.end))
                    && start <= end
                {
                    self.text.replace_range(start..end, &change.text);
                    self.line_offsets = Self::compute_line_offsets(&self.text);
                }
            } else {
                self.text = change.text;
                self.line_offsets = Self::compute_line_offsets(&self.text);
            }
        }
        self.version = version;
    }

    fn compute_line_offsets(text: &str) -> Vec<usize> {
        let mut offsets = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        offsets
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
