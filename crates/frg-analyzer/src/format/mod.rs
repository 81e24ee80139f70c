//! Canonical re-indentation and column alignment of FRG text.
//!
//! Blocks are flat, so every line inside a block gets exactly one indent
//! unit. The one exception is an `@attr(` or `@externDefs {` inside a type,
//! enum or service body: its contents get two. Struct fields and enum
//! members are buffered and aligned as a group; a blank line, comment or
//! any other line ends the group.

mod align;

pub use align::{EnumMemberInfo, FieldInfo, align_enum_members, align_fields};

use crate::{
    syntax::{BlockKind, BlockOpen, Delimiter, LineKind, Route, Scope, classify},
    text_pos,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// One level of indentation.
    pub indent: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new(
        indent_width: usize,
        use_tab: bool,
    ) -> Self {
        let indent = if use_tab {
            "\t".to_string()
        } else {
            " ".repeat(indent_width)
        };
        Self {
            indent,
        }
    }
}

/// Buffered alignment group for the current block.
#[derive(Default)]
struct PendingGroup {
    fields: Vec<FieldInfo>,
    members: Vec<EnumMemberInfo>,
}

impl PendingGroup {
    fn flush(
        &mut self,
        indent: &str,
        out: &mut Vec<String>,
    ) {
        if !self.fields.is_empty() {
            align_fields(&self.fields, indent, out);
            self.fields.clear();
        }
        if !self.members.is_empty() {
            align_enum_members(&self.members, indent, out);
            self.members.clear();
        }
    }
}

/// Reformat a whole document (or an isolated selection of one).
///
/// Never fails: unrecognised lines are kept with normalised indentation.
/// Runs of blank lines collapse to one and the result ends with exactly
/// one newline. Empty or all-blank input formats to an empty string.
pub fn format_frg(
    text: &str,
    options: &FormatOptions,
) -> String {
    let indent = options.indent.as_str();
    let mut out: Vec<String> = Vec::new();
    let mut pending = PendingGroup::default();
    let mut scope = Scope::TopLevel;
    // Body that an open `@attr(` or `@externDefs {` returns to.
    let mut outer: Option<Scope> = None;

    for line in text_pos::lines(text) {
        let kind = classify(line, scope);
        let body_indent = if outer.is_some() {
            indent.repeat(2)
        } else {
            indent.to_string()
        };
        match kind {
            LineKind::FieldDecl(field) => {
                pending.fields.push(field.into());
                continue;
            },
            LineKind::EnumMemberDecl(member) => {
                pending.members.push(member.into());
                continue;
            },
            _ => pending.flush(indent, &mut out),
        }

        match kind {
            LineKind::Blank => {
                if out.last().is_none_or(|last| !last.is_empty()) {
                    out.push(String::new());
                }
            },
            LineKind::Syntax => out.push(line.trim().to_string()),
            LineKind::BlockOpen(block) if outer.is_none() && block.kind.nests_in(scope) => {
                out.push(format!("{indent}{}", format_opener(&block)));
                if !block.closes_inline() {
                    outer = Some(scope);
                    scope = block.kind.scope();
                }
            },
            LineKind::BlockOpen(block) => {
                out.push(format_opener(&block));
                outer = None;
                scope = if block.closes_inline() {
                    Scope::TopLevel
                } else {
                    block.kind.scope()
                };
            },
            LineKind::BlockClose(delimiter) if closes(scope, delimiter) => {
                let closer = match delimiter {
                    Delimiter::Brace => "}",
                    Delimiter::Paren => ")",
                };
                match outer.take() {
                    Some(enclosing) => {
                        out.push(format!("{indent}{closer}"));
                        scope = enclosing;
                    },
                    None => {
                        out.push(closer.to_string());
                        scope = Scope::TopLevel;
                    },
                }
            },
            LineKind::Handler {
                name,
                trailing,
            } => out.push(with_trailing(format!("{indent}@handler {name}"), &trailing)),
            LineKind::Route(route) => out.push(format!("{indent}{}", format_route(&route))),
            LineKind::Import {
                path,
                trailing,
            } => out.push(with_trailing(format!("import \"{path}\""), &trailing)),
            LineKind::KeyValue {
                key,
                value,
                trailing,
            } => out.push(with_trailing(format!("{body_indent}{key}: \"{value}\""), &trailing)),
            LineKind::ExternDef {
                name,
                swagger_type,
                import_path,
                trailing,
            } => out.push(with_trailing(
                format!("{body_indent}name:\"{name}\", swaggerType:\"{swagger_type}\", importPath:\"{import_path}\""),
                &trailing,
            )),
            // Comments, unrecognised lines and mismatched closers.
            _ => {
                let content = line.trim();
                if scope.is_block() {
                    out.push(format!("{body_indent}{content}"));
                } else {
                    out.push(content.to_string());
                }
            },
        }
    }
    pending.flush(indent, &mut out);

    while out.last().is_some_and(|last| last.is_empty()) {
        out.pop();
    }
    if out.is_empty() {
        return String::new();
    }

    let mut formatted = out.join("\n");
    formatted.push('\n');
    formatted
}

/// Parens end only `info(` and `@attr(`; braces end everything else,
/// including a stray `}` at top level.
fn closes(
    scope: Scope,
    delimiter: Delimiter,
) -> bool {
    let paren_scope = matches!(scope, Scope::Info | Scope::Attr);
    match delimiter {
        Delimiter::Paren => paren_scope,
        Delimiter::Brace => !paren_scope,
    }
}

fn format_opener(block: &BlockOpen) -> String {
    let head = match block.kind {
        BlockKind::Type | BlockKind::Struct => {
            let name = block.name.as_deref().unwrap_or_default();
            if block.struct_suffix {
                format!("type {name} struct {{")
            } else {
                format!("{} {name} {{", block.kind.keyword())
            }
        },
        BlockKind::Enum => format!("enum {} {{", block.name.as_deref().unwrap_or_default()),
        BlockKind::Service => "service {".to_string(),
        BlockKind::Info => "info(".to_string(),
        BlockKind::Attr => "@attr(".to_string(),
        BlockKind::ExternDefs => "@externDefs {".to_string(),
    };

    // `info(title: "x")`, `type A {}`
    let paren = block.kind.scope().closing_delimiter() == Some(Delimiter::Paren);
    if paren || block.trailing == "}" {
        format!("{head}{}", block.trailing)
    } else {
        with_trailing(head, &block.trailing)
    }
}

fn format_route(route: &Route) -> String {
    let returns = route.returns.as_deref().unwrap_or_default();
    with_trailing(format!("{} {}({}) returns({returns})", route.method, route.path, route.params), &route.trailing)
}

fn with_trailing(
    mut line: String,
    trailing: &str,
) -> String {
    if !trailing.is_empty() {
        line.push(' ');
        line.push_str(trailing);
    }
    line
}

#[cfg(test)]
#[path = "../../tests/src/format/format_tests.rs"]
mod tests;
