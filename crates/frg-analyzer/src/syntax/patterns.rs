//! Compiled line patterns. Every pattern is applied to an already trimmed
//! line, so `^` anchors at the first non-blank character.

use once_cell::sync::Lazy;
use regex::Regex;

/// Identifier characters accepted in FRG names.
pub(crate) const IDENT: &str = "[A-Za-z0-9_]+";

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(error) => panic!("invalid built-in pattern {pattern:?}: {error}"),
    }
}

pub(crate) static SYNTAX: Lazy<Regex> = Lazy::new(|| compile(r"^syntax\s*="));

pub(crate) static INFO_OPEN: Lazy<Regex> = Lazy::new(|| compile(r"^info\s*\("));

pub(crate) static STRUCT_OPEN: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^(type|struct)\s+({IDENT})(?:\s+(struct))?\s*\{{(.*)$")));

pub(crate) static ENUM_OPEN: Lazy<Regex> = Lazy::new(|| compile(&format!(r"^enum\s+({IDENT})\s*\{{(.*)$")));

pub(crate) static SERVICE_OPEN: Lazy<Regex> = Lazy::new(|| compile(r"^service\s+\{$"));

pub(crate) static HANDLER: Lazy<Regex> = Lazy::new(|| compile(&format!(r"^@handler\s+({IDENT})(.*)$")));

pub(crate) static ROUTE_PREFIX: Lazy<Regex> = Lazy::new(|| compile(r"^(get|post|put|delete|patch)\s+"));

pub(crate) static ROUTE: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(get|post|put|delete|patch)\s+(\S+?)\s*\(([^)]*)\)\s*(?:returns\s*\(([^)]*)\))?(.*)$")
});

pub(crate) static FIELD: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^({IDENT})\s+(\S+?)\s*(`[^`]*`)?\s*(//.*)?$")));

pub(crate) static ENUM_MEMBER: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^({IDENT})(?:\s*=\s*([^;]+))?\s*;\s*(//.*)?$")));

pub(crate) static KEY_VALUE: Lazy<Regex> = Lazy::new(|| compile(&format!(r#"^({IDENT}):\s*"([^"]*)"(.*)$"#)));

pub(crate) static EXTERN_DEF: Lazy<Regex> = Lazy::new(|| {
    compile(r#"^name:\s*"([^"]*)",\s*swaggerType:\s*"([^"]*)",\s*importPath:\s*"([^"]*)"(.*)$"#)
});

pub(crate) static IMPORT: Lazy<Regex> = Lazy::new(|| compile(r#"^import\s+"([^"]+)"(.*)$"#));

/// `@handler NAME` anywhere on an untrimmed line, used by go-to-definition.
pub(crate) static HANDLER_ANYWHERE: Lazy<Regex> = Lazy::new(|| compile(&format!(r"@handler\s+({IDENT})")));

/// `type NAME {` / `enum NAME {` on an untrimmed line, used for code lenses.
pub(crate) static DEFINITION_ANY: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^\s*(type|enum)\s+({IDENT})\s+\{{")));

/// `import "PATH"` anywhere on an untrimmed line, used for document links.
pub(crate) static IMPORT_ANYWHERE: Lazy<Regex> = Lazy::new(|| compile(r#"import\s+"([^"]+)""#));
