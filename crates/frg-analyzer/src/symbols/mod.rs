mod provider;
mod scanner;
mod types;

pub use provider::document_symbols;
pub use scanner::extract_symbols;
pub use types::{Symbol, SymbolKind};

pub(crate) use scanner::is_ident_char;
