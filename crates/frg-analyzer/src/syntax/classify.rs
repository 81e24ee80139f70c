//! Stateless classification of a single FRG line.
//!
//! Rules are tried in a fixed order and the first match wins. Content
//! rules only fire inside the block kind they belong to, so the caller
//! passes the [`Scope`] it is currently tracking.

use crate::syntax::patterns;

/// Block the caller is currently inside. FRG blocks never nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    TopLevel,
    Info,
    Attr,
    ExternDefs,
    Struct,
    Enum,
    Service,
}

impl Scope {
    pub fn is_block(self) -> bool {
        !matches!(self, Scope::TopLevel)
    }

    /// Delimiter that terminates this block.
    pub fn closing_delimiter(self) -> Option<Delimiter> {
        match self {
            Scope::TopLevel => None,
            Scope::Info | Scope::Attr => Some(Delimiter::Paren),
            Scope::ExternDefs | Scope::Struct | Scope::Enum | Scope::Service => Some(Delimiter::Brace),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Brace,
    Paren,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Type,
    Struct,
    Enum,
    Service,
    Info,
    Attr,
    ExternDefs,
}

impl BlockKind {
    pub fn scope(self) -> Scope {
        match self {
            BlockKind::Type | BlockKind::Struct => Scope::Struct,
            BlockKind::Enum => Scope::Enum,
            BlockKind::Service => Scope::Service,
            BlockKind::Info => Scope::Info,
            BlockKind::Attr => Scope::Attr,
            BlockKind::ExternDefs => Scope::ExternDefs,
        }
    }

    /// `@attr(` and `@externDefs {` may sit inside a type, enum or service
    /// body without ending it.
    pub fn nests_in(
        self,
        scope: Scope,
    ) -> bool {
        matches!(self, BlockKind::Attr | BlockKind::ExternDefs)
            && matches!(scope, Scope::Struct | Scope::Enum | Scope::Service)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            BlockKind::Type => "type",
            BlockKind::Struct => "struct",
            BlockKind::Enum => "enum",
            BlockKind::Service => "service",
            BlockKind::Info => "info",
            BlockKind::Attr => "@attr",
            BlockKind::ExternDefs => "@externDefs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOpen {
    pub kind: BlockKind,
    pub name: Option<String>,
    /// `type NAME struct {` spelling.
    pub struct_suffix: bool,
    /// Whatever followed the opening brace, trimmed.
    pub trailing: String,
}

impl BlockOpen {
    fn unnamed(
        kind: BlockKind,
        trailing: &str,
    ) -> Self {
        Self {
            kind,
            name: None,
            struct_suffix: false,
            trailing: trailing.trim().to_string(),
        }
    }

    /// `type A {}` or `info(title: "x")` open and close on the same line.
    pub fn closes_inline(&self) -> bool {
        match self.kind.scope().closing_delimiter() {
            Some(Delimiter::Brace) => self.trailing.ends_with('}'),
            Some(Delimiter::Paren) => self.trailing.ends_with(')'),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: String,
    pub path: String,
    pub params: String,
    pub returns: Option<String>,
    pub trailing: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: String,
    /// Backtick-delimited tag including the backticks, or empty.
    pub tag: String,
    /// `//` comment including the slashes, or empty.
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMemberDecl {
    pub name: String,
    pub value: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// `syntax = "v1"`, passed through untouched.
    Syntax,
    BlockOpen(BlockOpen),
    BlockClose(Delimiter),
    Handler {
        name: String,
        trailing: String,
    },
    Route(Route),
    Import {
        path: String,
        trailing: String,
    },
    FieldDecl(FieldDecl),
    EnumMemberDecl(EnumMemberDecl),
    KeyValue {
        key: String,
        value: String,
        trailing: String,
    },
    ExternDef {
        name: String,
        swagger_type: String,
        import_path: String,
        trailing: String,
    },
    Comment,
    Other,
}

type Rule = fn(&str, Scope) -> Option<LineKind>;

/// Classification rules in priority order.
pub const RULES: &[(&str, Rule)] = &[
    ("blank", blank),
    ("syntax", syntax),
    ("info-open", info_open),
    ("extern-defs-open", extern_defs_open),
    ("attr-open", attr_open),
    ("struct-open", struct_open),
    ("enum-open", enum_open),
    ("service-open", service_open),
    ("block-close", block_close),
    ("handler", handler),
    ("route", route),
    ("field", field),
    ("enum-member", enum_member),
    ("key-value", key_value),
    ("extern-def", extern_def),
    ("import", import),
    ("comment", comment),
];

pub fn classify(
    line: &str,
    scope: Scope,
) -> LineKind {
    let trimmed = line.trim();
    RULES.iter().find_map(|(_, rule)| rule(trimmed, scope)).unwrap_or(LineKind::Other)
}

/// Name of the first rule that accepts `line`, or `None` for `Other`.
pub fn matching_rule(
    line: &str,
    scope: Scope,
) -> Option<&'static str> {
    let trimmed = line.trim();
    RULES.iter().find(|(_, rule)| rule(trimmed, scope).is_some()).map(|(name, _)| *name)
}

fn blank(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    line.is_empty().then_some(LineKind::Blank)
}

fn syntax(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    patterns::SYNTAX.is_match(line).then_some(LineKind::Syntax)
}

fn info_open(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    let found = patterns::INFO_OPEN.find(line)?;
    Some(LineKind::BlockOpen(BlockOpen::unnamed(BlockKind::Info, &line[found.end()..])))
}

fn extern_defs_open(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    let rest = line.strip_prefix("@externDefs")?.trim_start();
    let rest = rest.strip_prefix('{').unwrap_or(rest);
    Some(LineKind::BlockOpen(BlockOpen::unnamed(BlockKind::ExternDefs, rest)))
}

fn attr_open(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    let rest = line.strip_prefix("@attr(")?;
    Some(LineKind::BlockOpen(BlockOpen::unnamed(BlockKind::Attr, rest)))
}

fn struct_open(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    let caps = patterns::STRUCT_OPEN.captures(line)?;
    let kind = if &caps[1] == "struct" {
        BlockKind::Struct
    } else {
        BlockKind::Type
    };
    Some(LineKind::BlockOpen(BlockOpen {
        kind,
        name: Some(caps[2].to_string()),
        struct_suffix: caps.get(3).is_some(),
        trailing: caps[4].trim().to_string(),
    }))
}

fn enum_open(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    let caps = patterns::ENUM_OPEN.captures(line)?;
    Some(LineKind::BlockOpen(BlockOpen {
        kind: BlockKind::Enum,
        name: Some(caps[1].to_string()),
        struct_suffix: false,
        trailing: caps[2].trim().to_string(),
    }))
}

fn service_open(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    patterns::SERVICE_OPEN.is_match(line).then(|| LineKind::BlockOpen(BlockOpen::unnamed(BlockKind::Service, "")))
}

fn block_close(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    match line {
        "}" => Some(LineKind::BlockClose(Delimiter::Brace)),
        ")" => Some(LineKind::BlockClose(Delimiter::Paren)),
        _ => None,
    }
}

fn handler(
    line: &str,
    scope: Scope,
) -> Option<LineKind> {
    if scope != Scope::Service {
        return None;
    }
    let caps = patterns::HANDLER.captures(line)?;
    Some(LineKind::Handler {
        name: caps[1].to_string(),
        trailing: caps[2].trim().to_string(),
    })
}

fn route(
    line: &str,
    scope: Scope,
) -> Option<LineKind> {
    if scope != Scope::Service || !patterns::ROUTE_PREFIX.is_match(line) {
        return None;
    }
    let caps = patterns::ROUTE.captures(line)?;
    Some(LineKind::Route(Route {
        method: caps[1].to_string(),
        path: caps[2].trim().to_string(),
        params: caps[3].trim().to_string(),
        returns: caps.get(4).map(|m| m.as_str().trim().to_string()),
        trailing: caps[5].trim().to_string(),
    }))
}

fn field(
    line: &str,
    scope: Scope,
) -> Option<LineKind> {
    if scope != Scope::Struct {
        return None;
    }
    let caps = patterns::FIELD.captures(line)?;
    Some(LineKind::FieldDecl(FieldDecl {
        name: caps[1].to_string(),
        ty: caps[2].to_string(),
        tag: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
        comment: caps.get(4).map(|m| m.as_str().trim_end().to_string()).unwrap_or_default(),
    }))
}

fn enum_member(
    line: &str,
    scope: Scope,
) -> Option<LineKind> {
    if scope != Scope::Enum {
        return None;
    }
    let caps = patterns::ENUM_MEMBER.captures(line)?;
    Some(LineKind::EnumMemberDecl(EnumMemberDecl {
        name: caps[1].to_string(),
        value: caps.get(2).map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
        comment: caps.get(3).map(|m| m.as_str().trim_end().to_string()).unwrap_or_default(),
    }))
}

fn key_value(
    line: &str,
    scope: Scope,
) -> Option<LineKind> {
    if !matches!(scope, Scope::Info | Scope::Attr) {
        return None;
    }
    let caps = patterns::KEY_VALUE.captures(line)?;
    Some(LineKind::KeyValue {
        key: caps[1].to_string(),
        value: caps[2].to_string(),
        trailing: caps[3].trim().to_string(),
    })
}

fn extern_def(
    line: &str,
    scope: Scope,
) -> Option<LineKind> {
    if scope != Scope::ExternDefs {
        return None;
    }
    let caps = patterns::EXTERN_DEF.captures(line)?;
    Some(LineKind::ExternDef {
        name: caps[1].to_string(),
        swagger_type: caps[2].to_string(),
        import_path: caps[3].to_string(),
        trailing: caps[4].trim().to_string(),
    })
}

fn import(
    line: &str,
    scope: Scope,
) -> Option<LineKind> {
    if scope != Scope::TopLevel {
        return None;
    }
    let caps = patterns::IMPORT.captures(line)?;
    Some(LineKind::Import {
        path: caps[1].to_string(),
        trailing: caps[2].trim().to_string(),
    })
}

fn comment(
    line: &str,
    _: Scope,
) -> Option<LineKind> {
    line.starts_with("//").then_some(LineKind::Comment)
}

#[cfg(test)]
#[path = "../../tests/src/syntax/classify_tests.rs"]
mod tests;
