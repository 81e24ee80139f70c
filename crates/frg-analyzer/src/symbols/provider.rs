use tower_lsp::lsp_types::{self, DocumentSymbol};

use crate::ide::lsp::ide_range_to_lsp;

use super::scanner::extract_symbols;
use super::types::{Symbol, SymbolKind};

/// Outline of `text` in the shape `textDocument/documentSymbol` returns.
pub fn document_symbols(text: &str) -> Vec<DocumentSymbol> {
    extract_symbols(text).iter().map(to_document_symbol).collect()
}

#[allow(deprecated)]
fn to_document_symbol(symbol: &Symbol) -> DocumentSymbol {
    let children = if symbol.children.is_empty() {
        None
    } else {
        Some(symbol.children.iter().map(to_document_symbol).collect())
    };

    DocumentSymbol {
        name: symbol.name.clone(),
        detail: Some(symbol.detail.clone()),
        kind: lsp_kind(symbol.kind),
        tags: None,
        deprecated: None,
        range: ide_range_to_lsp(symbol.range),
        selection_range: ide_range_to_lsp(symbol.selection_range),
        children,
    }
}

fn lsp_kind(kind: SymbolKind) -> lsp_types::SymbolKind {
    match kind {
        SymbolKind::Struct => lsp_types::SymbolKind::STRUCT,
        SymbolKind::Enum => lsp_types::SymbolKind::ENUM,
        SymbolKind::Interface => lsp_types::SymbolKind::INTERFACE,
        SymbolKind::Package => lsp_types::SymbolKind::PACKAGE,
        SymbolKind::Method => lsp_types::SymbolKind::METHOD,
        SymbolKind::Field => lsp_types::SymbolKind::FIELD,
        SymbolKind::EnumMember => lsp_types::SymbolKind::ENUM_MEMBER,
    }
}
