//! Workspace file discovery and reads for navigation scans.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::WorkspaceSettings,
    document::DocumentStore,
    navigation::{SourceProvider, SourceSet},
};

/// Files under the workspace roots, with open documents layered on top of
/// what is on disk.
pub struct WorkspaceSources {
    roots: Vec<PathBuf>,
    settings: WorkspaceSettings,
    documents: Arc<DocumentStore>,
}

impl WorkspaceSources {
    pub fn new(
        roots: Vec<PathBuf>,
        settings: WorkspaceSettings,
        documents: Arc<DocumentStore>,
    ) -> Self {
        Self {
            roots,
            settings,
            documents,
        }
    }

    fn extension(
        &self,
        set: SourceSet,
    ) -> &str {
        match set {
            SourceSet::Frg => &self.settings.frg_extension,
            SourceSet::Implementation => &self.settings.implementation_extension,
        }
    }

    /// Walk every root in file-name order. Blocking; run off the async
    /// executor.
    fn discover(
        roots: &[PathBuf],
        extension: &str,
        exclude_paths: &[String],
        max_file_size_bytes: u64,
    ) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut seen = HashSet::new();

        for root in roots {
            let excluded_prefixes: Vec<PathBuf> = exclude_paths.iter().map(|p| root.join(p)).collect();
            for entry in WalkDir::new(root)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| should_descend(entry, exclude_paths, &excluded_prefixes))
                .filter_map(|e| e.ok())
            {
                if !entry.file_type().is_file() {
                    continue;
                }

                let path = entry.path();
                if !path.extension().is_some_and(|ext| ext == extension) {
                    continue;
                }

                if let Ok(metadata) = entry.metadata()
                    && metadata.len() > max_file_size_bytes
                {
                    debug!("Skipping large workspace file ({} bytes): {}", metadata.len(), path.display());
                    continue;
                }

                if seen.insert(path.to_path_buf()) {
                    files.push(path.to_path_buf());
                }
            }
        }
        files
    }
}

#[tower_lsp::async_trait]
impl SourceProvider for WorkspaceSources {
    async fn list_files(
        &self,
        set: SourceSet,
    ) -> Vec<PathBuf> {
        let roots = self.roots.clone();
        let extension = self.extension(set).to_string();
        let exclude_paths = self.settings.exclude_paths.clone();
        let max_file_size_bytes = self.settings.max_file_size_bytes();

        tokio::task::spawn_blocking(move || Self::discover(&roots, &extension, &exclude_paths, max_file_size_bytes))
            .await
            .unwrap_or_default()
    }

    async fn read_file(
        &self,
        path: &Path,
    ) -> std::io::Result<String> {
        if let Some(text) = self.documents.get_content_by_path(path) {
            return Ok(text);
        }
        tokio::fs::read_to_string(path).await
    }
}

/// Excluded names match any directory component; excluded paths match as
/// prefixes of the root. Hidden directories below the root are skipped.
fn should_descend(
    entry: &DirEntry,
    exclude_names: &[String],
    excluded_prefixes: &[PathBuf],
) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if excluded_prefixes.iter().any(|prefix| entry.path().starts_with(prefix)) {
        return false;
    }
    if !entry.file_type().is_dir() {
        return true;
    }

    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    !name.starts_with('.') && !exclude_names.iter().any(|excluded| excluded == name)
}

#[cfg(test)]
#[path = "../../tests/src/server/workspace_tests.rs"]
mod tests;
