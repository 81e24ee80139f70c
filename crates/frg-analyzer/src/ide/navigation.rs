use std::path::{Path, PathBuf};

/// Zero-based line and UTF-16 column, the unit editors count in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IdePosition {
    pub line: u32,
    pub character: u32,
}

impl IdePosition {
    pub const fn new(
        line: u32,
        character: u32,
    ) -> Self {
        Self {
            line,
            character,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdeRange {
    pub start: IdePosition,
    pub end: IdePosition,
}

impl IdeRange {
    pub const fn new(
        start: IdePosition,
        end: IdePosition,
    ) -> Self {
        Self {
            start,
            end,
        }
    }

    /// Range covering `start..end` columns of a single line.
    pub const fn on_line(
        line: u32,
        start: u32,
        end: u32,
    ) -> Self {
        Self::new(IdePosition::new(line, start), IdePosition::new(line, end))
    }

    /// Empty range at the first column of `line`.
    pub const fn line_start(line: u32) -> Self {
        Self::on_line(line, 0, 0)
    }
}

/// A file plus a range inside it. Produced per query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdeLocation {
    pub file_path: PathBuf,
    pub range: IdeRange,
}

impl IdeLocation {
    pub fn new(
        file_path: impl Into<PathBuf>,
        range: IdeRange,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            range,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}
