pub(crate) mod formatting;
pub mod frgfmt;
pub(crate) mod handler;
pub(crate) mod state;
pub mod workspace;

pub use frgfmt::FormatConfigError;
pub use state::FrgLanguageServer;
pub use workspace::WorkspaceSources;
