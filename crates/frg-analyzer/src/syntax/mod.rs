//! Line-oriented recognition of FRG source text.
//!
//! There is no token stream or tree: each line is classified on its own
//! and callers track the single open block themselves.

pub mod classify;
pub(crate) mod patterns;

pub use classify::{
    BlockKind, BlockOpen, Delimiter, EnumMemberDecl, FieldDecl, LineKind, Route, Scope, classify, matching_rule,
};
