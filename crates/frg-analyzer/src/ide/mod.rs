pub mod lsp;
pub mod navigation;

pub use navigation::{IdeLocation, IdePosition, IdeRange};
