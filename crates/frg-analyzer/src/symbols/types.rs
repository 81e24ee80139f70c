use crate::ide::IdeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Struct,
    Enum,
    Interface,
    Package,
    Method,
    Field,
    EnumMember,
}

/// One node of the outline tree.
///
/// Only `Struct`/`Enum` (fields, members) and `Interface` (handlers)
/// ever carry children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub detail: String,
    pub kind: SymbolKind,
    /// Whole declaration: the opening line through its closing line.
    pub range: IdeRange,
    /// The name token, or the opening line when there is no name.
    pub selection_range: IdeRange,
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub(crate) fn leaf(
        name: impl Into<String>,
        detail: impl Into<String>,
        kind: SymbolKind,
        range: IdeRange,
        selection_range: IdeRange,
    ) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            kind,
            range,
            selection_range,
            children: Vec::new(),
        }
    }
}
