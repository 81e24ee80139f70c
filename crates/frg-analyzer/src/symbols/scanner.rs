use crate::{
    ide::IdeRange,
    symbols::types::{Symbol, SymbolKind},
    syntax::{BlockKind, LineKind, Scope, classify},
    text_pos::{self, utf16_column_of_byte_offset, utf16_len},
};

/// The block currently open. Only `@attr(` and `@externDefs {` nest, and
/// only one level deep, so a single saved outer block replaces a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenBlock {
    Nothing,
    /// A block that produced a top-level symbol at `index`.
    Symbol {
        index: usize,
        scope: Scope,
    },
    /// `@attr(` / `@externDefs {` bodies: tracked but not outlined.
    Anonymous(Scope),
}

impl OpenBlock {
    fn scope(self) -> Scope {
        match self {
            OpenBlock::Nothing => Scope::TopLevel,
            OpenBlock::Symbol {
                scope,
                ..
            } => scope,
            OpenBlock::Anonymous(scope) => scope,
        }
    }
}

/// Build the outline of an FRG document.
///
/// Blocks left open at end of input keep their single-line range.
pub fn extract_symbols(text: &str) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = Vec::new();
    let mut open = OpenBlock::Nothing;
    let mut enclosing: Option<OpenBlock> = None;

    for (line_index, line) in text_pos::lines(text).enumerate() {
        let line_no = line_index as u32;
        let line_range = IdeRange::on_line(line_no, 0, utf16_len(line));

        match classify(line, open.scope()) {
            LineKind::BlockOpen(block) if enclosing.is_none() && block.kind.nests_in(open.scope()) => {
                if !block.closes_inline() {
                    enclosing = Some(open);
                    open = OpenBlock::Anonymous(block.kind.scope());
                }
            },
            LineKind::BlockOpen(block) => {
                let symbol = match block.kind {
                    BlockKind::Type | BlockKind::Struct | BlockKind::Enum => {
                        let name = block.name.clone().unwrap_or_default();
                        let (kind, detail) = if block.kind == BlockKind::Enum {
                            (SymbolKind::Enum, "enum")
                        } else {
                            (SymbolKind::Struct, block.kind.keyword())
                        };
                        let selection = name_range(line, line_no, &name).unwrap_or(line_range);
                        Some(Symbol::leaf(name, detail, kind, line_range, selection))
                    },
                    BlockKind::Service => Some(Symbol::leaf(
                        "service",
                        "Service Definition",
                        SymbolKind::Interface,
                        line_range,
                        line_range,
                    )),
                    BlockKind::Info => {
                        Some(Symbol::leaf("info", "Package Info", SymbolKind::Package, line_range, line_range))
                    },
                    BlockKind::Attr | BlockKind::ExternDefs => None,
                };

                enclosing = None;
                open = match symbol {
                    Some(symbol) => {
                        symbols.push(symbol);
                        if block.closes_inline() {
                            OpenBlock::Nothing
                        } else {
                            OpenBlock::Symbol {
                                index: symbols.len() - 1,
                                scope: block.kind.scope(),
                            }
                        }
                    },
                    None => OpenBlock::Anonymous(block.kind.scope()),
                };
            },
            LineKind::BlockClose(delimiter) if enclosing.is_some() => {
                if open.scope().closing_delimiter() == Some(delimiter)
                    && let Some(outer) = enclosing.take()
                {
                    open = outer;
                }
            },
            LineKind::BlockClose(_) => {
                if let OpenBlock::Symbol {
                    index,
                    ..
                } = open
                    && let Some(symbol) = symbols.get_mut(index)
                {
                    symbol.range.end = line_range.end;
                }
                open = OpenBlock::Nothing;
            },
            LineKind::Handler {
                name, ..
            } => {
                let selection = name_range(line, line_no, &name).unwrap_or(line_range);
                push_child(
                    &mut symbols,
                    open,
                    Symbol::leaf(name, "Handler", SymbolKind::Method, line_range, selection),
                );
            },
            LineKind::FieldDecl(field) => {
                let selection = name_range(line, line_no, &field.name).unwrap_or(line_range);
                push_child(
                    &mut symbols,
                    open,
                    Symbol::leaf(field.name, field.ty, SymbolKind::Field, line_range, selection),
                );
            },
            LineKind::EnumMemberDecl(member) => {
                let selection = name_range(line, line_no, &member.name).unwrap_or(line_range);
                push_child(
                    &mut symbols,
                    open,
                    Symbol::leaf(member.name, "", SymbolKind::EnumMember, line_range, selection),
                );
            },
            _ => {},
        }
    }

    symbols
}

/// Attach a child to the open symbol. The classifier already limits
/// handlers to services and fields/members to their block kinds.
fn push_child(
    symbols: &mut [Symbol],
    open: OpenBlock,
    child: Symbol,
) {
    if let OpenBlock::Symbol {
        index,
        ..
    } = open
        && let Some(parent) = symbols.get_mut(index)
    {
        parent.children.push(child);
    }
}

/// Range of the first whole-word occurrence of `name` on `line`.
fn name_range(
    line: &str,
    line_no: u32,
    name: &str,
) -> Option<IdeRange> {
    if name.is_empty() {
        return None;
    }
    let mut from = 0;
    while let Some(found) = line[from..].find(name) {
        let start = from + found;
        let end = start + name.len();
        let before_ok = !line[..start].chars().next_back().is_some_and(is_ident_char);
        let after_ok = !line[end..].chars().next().is_some_and(is_ident_char);
        if before_ok && after_ok {
            return Some(IdeRange::on_line(
                line_no,
                utf16_column_of_byte_offset(line, start),
                utf16_column_of_byte_offset(line, end),
            ));
        }
        from = end;
    }
    None
}

pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "../../tests/src/symbols/scanner_tests.rs"]
mod tests;
