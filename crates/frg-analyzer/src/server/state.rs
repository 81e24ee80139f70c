use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use tokio::sync::RwLock;
use tower_lsp::{
    Client,
    lsp_types::{Url, WorkspaceFolder},
};

use crate::{config::ServerSettings, document::DocumentStore, server::workspace::WorkspaceSources};

/// The frg-analyzer backend that implements the Language Server Protocol.
pub struct FrgLanguageServer {
    /// The LSP client handle, used for log and show-message notifications.
    pub(crate) client: Client,

    /// Thread-safe store of all open documents.
    pub(crate) document_store: Arc<DocumentStore>,

    /// Workspace root folders, populated during `initialize`.
    pub(crate) workspace_roots: RwLock<Vec<WorkspaceFolder>>,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,

    /// Monotonic generation for go-to-definition requests.
    ///
    /// Bumped on every new request; an in-flight workspace scan for an
    /// older request stops at its next file boundary.
    pub(crate) definition_generation: Arc<AtomicU64>,

    /// Same as `definition_generation`, for find-references.
    pub(crate) references_generation: Arc<AtomicU64>,
}

impl FrgLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            document_store: Arc::new(DocumentStore::new()),
            workspace_roots: RwLock::new(Vec::new()),
            settings: Arc::new(RwLock::new(ServerSettings::default())),
            definition_generation: Arc::new(AtomicU64::new(0)),
            references_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn apply_settings(
        &self,
        settings: ServerSettings,
    ) {
        *self.settings.write().await = settings;
    }

    /// Sources for a scan started from `uri`. Without workspace folders the
    /// document's own directory is the only root.
    pub(crate) async fn workspace_sources(
        &self,
        uri: &Url,
    ) -> WorkspaceSources {
        let mut roots: Vec<PathBuf> =
            self.workspace_roots.read().await.iter().filter_map(|f| f.uri.to_file_path().ok()).collect();
        if roots.is_empty()
            && let Some(parent) = uri.to_file_path().ok().and_then(|p| p.parent().map(PathBuf::from))
        {
            roots.push(parent);
        }

        let settings = self.settings_snapshot().await;
        WorkspaceSources::new(roots, settings.workspace, Arc::clone(&self.document_store))
    }
}

/// Start a new request of one kind. The returned check reports `true` once
/// a newer request of the same kind has started.
pub(crate) fn begin_request(generation: &Arc<AtomicU64>) -> impl Fn() -> bool + Send + Sync + 'static {
    let current = generation.fetch_add(1, Ordering::Relaxed) + 1;
    let generation = Arc::clone(generation);
    move || generation.load(Ordering::Relaxed) != current
}

#[cfg(test)]
#[path = "../../tests/src/server/state_tests.rs"]
mod tests;
