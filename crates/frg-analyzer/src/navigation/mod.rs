//! Definition and reference lookup by rescanning workspace text.
//!
//! Nothing is cached between queries; every call reads its files again
//! through a [`SourceProvider`].

mod query;
mod resolver;
mod sources;

pub use query::{definition_pattern, find_in_text, find_locations, word_pattern};
pub use resolver::{
    find_handler_implementations, resolve_definition, resolve_references, to_pascal_case, word_at_position,
};
pub use sources::{SourceProvider, SourceSet};
