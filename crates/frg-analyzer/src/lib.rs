pub mod config;
pub mod document;
pub mod format;
pub mod ide;
pub mod lens;
pub mod links;
pub mod navigation;
pub mod server;
pub mod symbols;
pub mod syntax;
pub mod text_pos;

pub use config::ServerSettings;
pub use format::{FormatOptions, format_frg};
pub use ide::{IdeLocation, IdePosition, IdeRange};
pub use lens::{LensAnchor, lens_anchors, lens_title};
pub use links::{ImportLink, import_links};
pub use navigation::{SourceProvider, SourceSet, find_locations, resolve_definition, resolve_references};
pub use server::FrgLanguageServer;
pub use symbols::{Symbol, SymbolKind, document_symbols, extract_symbols};
pub use syntax::{LineKind, classify};
