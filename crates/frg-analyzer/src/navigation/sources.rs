use std::path::{Path, PathBuf};

/// The two file populations a navigation query can scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceSet {
    /// FRG definition files.
    Frg,
    /// Server implementation sources searched for handler functions.
    Implementation,
}

/// File listing and reading, supplied by whoever hosts the queries.
///
/// Queries visit files in the order `list_files` returns them.
#[tower_lsp::async_trait]
pub trait SourceProvider: Send + Sync {
    async fn list_files(
        &self,
        set: SourceSet,
    ) -> Vec<PathBuf>;

    async fn read_file(
        &self,
        path: &Path,
    ) -> std::io::Result<String>;
}
