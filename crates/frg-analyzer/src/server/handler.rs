use std::{panic::AssertUnwindSafe, path::PathBuf};

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tower_lsp::{LanguageServer, jsonrpc::Result, lsp_types::*};
use tracing::{debug, info, warn};

use crate::{
    config::ServerSettings,
    document::Document,
    format::FormatOptions,
    ide::lsp::{ide_locations_to_lsp, ide_range_to_lsp, locations_to_definition_response, lsp_position_to_ide},
    lens::{lens_anchors, lens_title},
    links::import_links,
    navigation::{find_locations, resolve_definition, resolve_references},
    server::{
        formatting::{format_document, format_range},
        frgfmt::{editor_format_options, resolve_format_options},
        state::{FrgLanguageServer, begin_request},
    },
    symbols::document_symbols,
};

const CLIENT_NOTIFICATION_PREFIX: &str = "frg-analyzer:";

/// Payload carried from `codeLens` to `codeLens/resolve`.
#[derive(Debug, Serialize, Deserialize)]
struct LensData {
    uri: Url,
    name: String,
}

#[tower_lsp::async_trait]
impl LanguageServer for FrgLanguageServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing frg-analyzer...");

        let initial_settings = ServerSettings::from_lsp_payload(params.initialization_options.as_ref());
        self.apply_settings(initial_settings).await;

        if let Some(folders) = params.workspace_folders {
            *self.workspace_roots.write().await = folders;
        } else if let Some(root) = params.root_uri {
            *self.workspace_roots.write().await = vec![WorkspaceFolder {
                uri: root,
                name: "root".to_string(),
            }];
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::INCREMENTAL),
                    save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                        include_text: Some(false),
                    })),
                    ..Default::default()
                })),
                definition_provider: Some(OneOf::Left(true)),
                references_provider: Some(OneOf::Left(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                code_lens_provider: Some(CodeLensOptions {
                    resolve_provider: Some(true),
                }),
                document_link_provider: Some(DocumentLinkOptions {
                    resolve_provider: Some(false),
                    work_done_progress_options: Default::default(),
                }),
                document_formatting_provider: Some(OneOf::Left(true)),
                document_range_formatting_provider: Some(OneOf::Left(true)),
                workspace: Some(WorkspaceServerCapabilities {
                    workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                        supported: Some(true),
                        change_notifications: Some(OneOf::Left(true)),
                    }),
                    file_operations: None,
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "frg-analyzer".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        let roots = self.workspace_roots.read().await.len();
        info!("frg-analyzer initialized ({roots} workspace folder(s))");
        self.log_to_client("Ready").await;
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = self.settings_snapshot().await;
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }
        self.apply_settings(merged).await;
        info!("Applied updated frg-analyzer settings");
    }

    async fn did_change_workspace_folders(
        &self,
        params: DidChangeWorkspaceFoldersParams,
    ) {
        let mut roots = self.workspace_roots.write().await;
        roots.retain(|folder| !params.event.removed.iter().any(|removed| removed.uri == folder.uri));
        for added in params.event.added {
            if !roots.iter().any(|folder| folder.uri == added.uri) {
                roots.push(added);
            }
        }
        info!("Workspace folders changed ({} now)", roots.len());
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down frg-analyzer");
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;
        let version = params.text_document.version;
        let filename = short_name(&uri);

        info!("Opened {filename} (v{version}, {} bytes)", text.len());
        self.document_store.open(uri, text, version);
        self.log_to_client(format!("Opened {filename}")).await;
    }

    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        if !self.document_store.apply_changes(&uri, params.content_changes, version) {
            warn!("Change for unopened document {uri}");
        }
    }

    async fn did_save(
        &self,
        params: DidSaveTextDocumentParams,
    ) {
        // Content already arrived through didChange; saves carry no text.
        debug!("Saved {}", short_name(&params.text_document.uri));
    }

    async fn did_close(
        &self,
        params: DidCloseTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        self.document_store.close(&uri);
        debug!("Closed {}", short_name(&uri));
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };
        let Ok(path) = uri.to_file_path() else {
            return Ok(None);
        };

        let is_cancelled = begin_request(&self.definition_generation);
        let sources = self.workspace_sources(&uri).await;
        let start = std::time::Instant::now();
        let locations =
            resolve_definition(&path, &text, lsp_position_to_ide(position), &sources, &is_cancelled).await;

        debug!(
            "goto-def {}:{}:{} → {} location(s) ({:?}{})",
            short_name(&uri),
            position.line + 1,
            position.character + 1,
            locations.len(),
            start.elapsed(),
            if is_cancelled() {
                ", cancelled"
            } else {
                ""
            },
        );
        Ok(locations_to_definition_response(locations))
    }

    async fn references(
        &self,
        params: ReferenceParams,
    ) -> Result<Option<Vec<Location>>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };

        let is_cancelled = begin_request(&self.references_generation);
        let sources = self.workspace_sources(&uri).await;
        let locations = resolve_references(&text, lsp_position_to_ide(position), &sources, &is_cancelled).await;
        debug!("references {}:{} → {} location(s)", short_name(&uri), position.line + 1, locations.len());
        Ok(Some(ide_locations_to_lsp(locations)))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let Some(text) = self.document_store.get_content(&params.text_document.uri) else {
            return Ok(None);
        };
        Ok(Some(DocumentSymbolResponse::Nested(document_symbols(&text))))
    }

    async fn code_lens(
        &self,
        params: CodeLensParams,
    ) -> Result<Option<Vec<CodeLens>>> {
        if !self.settings_snapshot().await.code_lens.enable {
            return Ok(None);
        }
        let uri = params.text_document.uri;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };

        let lenses = lens_anchors(&text)
            .into_iter()
            .map(|anchor| CodeLens {
                range: ide_range_to_lsp(anchor.range),
                command: None,
                data: serde_json::to_value(LensData {
                    uri: uri.clone(),
                    name: anchor.name,
                })
                .ok(),
            })
            .collect();
        Ok(Some(lenses))
    }

    async fn code_lens_resolve(
        &self,
        mut lens: CodeLens,
    ) -> Result<CodeLens> {
        let Some(data) = lens.data.clone().and_then(|data| serde_json::from_value::<LensData>(data).ok()) else {
            warn!("codeLens/resolve without usable data");
            return Ok(lens);
        };

        // Lens resolution is never superseded; each lens counts on its own.
        let never_cancelled = || false;
        let sources = self.workspace_sources(&data.uri).await;
        let locations = ide_locations_to_lsp(find_locations(&data.name, &sources, &never_cancelled).await);
        let command = self.settings_snapshot().await.code_lens.command;

        lens.command = Some(Command {
            title: lens_title(locations.len()),
            command,
            arguments: Some(vec![
                serde_json::json!(data.uri),
                serde_json::json!(lens.range.start),
                serde_json::json!(locations),
            ]),
        });
        Ok(lens)
    }

    async fn document_link(
        &self,
        params: DocumentLinkParams,
    ) -> Result<Option<Vec<DocumentLink>>> {
        let uri = params.text_document.uri;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };
        let Some(base_dir) = uri.to_file_path().ok().and_then(|p| p.parent().map(PathBuf::from)) else {
            return Ok(None);
        };

        let links = import_links(&text, &base_dir)
            .into_iter()
            .map(|link| DocumentLink {
                range: ide_range_to_lsp(link.range),
                target: Url::from_file_path(&link.target).ok(),
                tooltip: None,
                data: None,
            })
            .collect();
        Ok(Some(links))
    }

    async fn formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> Result<Option<Vec<TextEdit>>> {
        let Some(document) = self.document_store.get(&params.text_document.uri) else {
            return Ok(None);
        };
        if !self.settings_snapshot().await.formatting.enable {
            return Ok(Some(Vec::new()));
        }

        let options = self.format_options_for(&document, &params.options).await;
        Ok(Some(format_document(&document, &options).into_iter().collect()))
    }

    async fn range_formatting(
        &self,
        params: DocumentRangeFormattingParams,
    ) -> Result<Option<Vec<TextEdit>>> {
        let Some(document) = self.document_store.get(&params.text_document.uri) else {
            return Ok(None);
        };
        if !self.settings_snapshot().await.formatting.enable {
            return Ok(Some(Vec::new()));
        }

        let options = self.format_options_for(&document, &params.options).await;
        Ok(Some(format_range(&document, params.range, &options).into_iter().collect()))
    }
}

impl FrgLanguageServer {
    /// `frgfmt.toml` options for the document, falling back to defaults
    /// (with a warning) when the file is unreadable or invalid.
    async fn format_options_for(
        &self,
        document: &Document,
        editor: &FormattingOptions,
    ) -> FormatOptions {
        if !self.settings_snapshot().await.formatting.use_project_config {
            return editor_format_options(editor);
        }
        let Ok(path) = document.uri.to_file_path() else {
            return FormatOptions::default();
        };
        match resolve_format_options(&path) {
            Ok(options) => options,
            Err(error) => {
                warn!("Using default formatting options: {error}");
                if self.settings_snapshot().await.logging.level.allows(MessageType::WARNING) {
                    self.client
                        .show_message(
                            MessageType::WARNING,
                            prefixed_client_message(format!("{error}; using defaults")),
                        )
                        .await;
                }
                FormatOptions::default()
            },
        }
    }

    /// Mirror a short lifecycle message to the client log when the
    /// configured level allows it.
    async fn log_to_client(
        &self,
        message: impl AsRef<str>,
    ) {
        if !self.settings_snapshot().await.logging.level.allows(MessageType::INFO) {
            return;
        }
        let result = AssertUnwindSafe(self.client.log_message(MessageType::INFO, prefixed_client_message(message)))
            .catch_unwind()
            .await;
        if result.is_err() {
            warn!("log_message panicked (client may have disconnected)");
        }
    }
}

fn short_name(uri: &Url) -> String {
    uri.path().rsplit('/').next().unwrap_or(uri.path()).to_owned()
}

fn prefixed_client_message(message: impl AsRef<str>) -> String {
    format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref())
}
