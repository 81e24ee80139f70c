//! Column alignment for buffered struct fields and enum members.

use crate::syntax::{EnumMemberDecl, FieldDecl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub ty: String,
    pub tag: String,
    pub comment: String,
}

impl From<FieldDecl> for FieldInfo {
    fn from(decl: FieldDecl) -> Self {
        Self {
            name: decl.name,
            ty: decl.ty,
            tag: decl.tag,
            comment: decl.comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMemberInfo {
    pub name: String,
    pub value: String,
    pub comment: String,
}

impl From<EnumMemberDecl> for EnumMemberInfo {
    fn from(decl: EnumMemberDecl) -> Self {
        Self {
            name: decl.name,
            value: decl.value,
            comment: decl.comment,
        }
    }
}

/// `NAME TYPE [TAG] [// comment]` with names, types and comments each
/// starting in a shared column.
pub fn align_fields(
    fields: &[FieldInfo],
    indent: &str,
    out: &mut Vec<String>,
) {
    let name_width = max_width(fields.iter().map(|f| f.name.as_str()));
    let type_width = max_width(fields.iter().map(|f| f.ty.as_str()));

    let bodies: Vec<String> = fields
        .iter()
        .map(|field| {
            let mut body = format!("{indent}{:<name_width$} {:<type_width$}", field.name, field.ty);
            if !field.tag.is_empty() {
                body.push(' ');
                body.push_str(&field.tag);
            }
            body
        })
        .collect();

    push_with_comments(bodies, fields.iter().map(|f| f.comment.as_str()), out);
}

/// `NAME = VALUE;` or `NAME;` with values and comments aligned.
pub fn align_enum_members(
    members: &[EnumMemberInfo],
    indent: &str,
    out: &mut Vec<String>,
) {
    let name_width = max_width(members.iter().filter(|m| !m.value.is_empty()).map(|m| m.name.as_str()));

    let bodies: Vec<String> = members
        .iter()
        .map(|member| {
            if member.value.is_empty() {
                format!("{indent}{};", member.name)
            } else {
                format!("{indent}{:<name_width$} = {};", member.name, member.value)
            }
        })
        .collect();

    push_with_comments(bodies, members.iter().map(|m| m.comment.as_str()), out);
}

fn push_with_comments<'a>(
    bodies: Vec<String>,
    comments: impl Iterator<Item = &'a str>,
    out: &mut Vec<String>,
) {
    let comment_column = bodies.iter().map(|body| body.trim_end().chars().count()).max().unwrap_or(0);

    for (body, comment) in bodies.into_iter().zip(comments) {
        let body = body.trim_end();
        if comment.is_empty() {
            out.push(body.to_string());
        } else {
            let padding = comment_column - body.chars().count();
            out.push(format!("{body}{} {comment}", " ".repeat(padding)));
        }
    }
}

fn max_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|name| name.chars().count()).max().unwrap_or(0)
}
