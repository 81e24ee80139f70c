use super::*;
use crate::ide::IdePosition;

const SAMPLE: &str = r#"syntax = "v1"

info(
    title: "user api"
)

type User struct {
    Id   int64  `json:"id"`
    Name string `json:"name"` // display name
}

enum Status {
    Active = 1;
    Banned;
}

service {
    @handler getUser
    get /users/:id(GetReq) returns(User)
}
"#;

#[test]
fn outline_has_one_entry_per_block() {
    let symbols = extract_symbols(SAMPLE);
    let names: Vec<_> = symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(
        names,
        vec![
            ("info", SymbolKind::Package),
            ("User", SymbolKind::Struct),
            ("Status", SymbolKind::Enum),
            ("service", SymbolKind::Interface),
        ]
    );
}

#[test]
fn struct_children_are_fields_with_type_detail() {
    let symbols = extract_symbols(SAMPLE);
    let user = &symbols[1];
    assert_eq!(user.detail, "type");
    let fields: Vec<_> = user.children.iter().map(|c| (c.name.as_str(), c.detail.as_str(), c.kind)).collect();
    assert_eq!(fields, vec![("Id", "int64", SymbolKind::Field), ("Name", "string", SymbolKind::Field)]);
}

#[test]
fn block_range_extends_to_closing_line() {
    let symbols = extract_symbols(SAMPLE);
    let user = &symbols[1];
    assert_eq!(user.range.start, IdePosition::new(6, 0));
    assert_eq!(user.range.end, IdePosition::new(9, 1));
    assert_eq!(user.selection_range, IdeRange::on_line(6, 5, 9));

    let info = &symbols[0];
    assert_eq!(info.detail, "Package Info");
    assert_eq!(info.range.end, IdePosition::new(4, 1));
}

#[test]
fn enum_members_have_empty_detail() {
    let symbols = extract_symbols(SAMPLE);
    let status = &symbols[2];
    let members: Vec<_> = status.children.iter().map(|c| (c.name.as_str(), c.detail.as_str())).collect();
    assert_eq!(members, vec![("Active", ""), ("Banned", "")]);
    assert!(status.children.iter().all(|c| c.kind == SymbolKind::EnumMember));
}

#[test]
fn handlers_nest_under_service() {
    let symbols = extract_symbols(SAMPLE);
    let service = &symbols[3];
    assert_eq!(service.detail, "Service Definition");
    assert_eq!(service.children.len(), 1);
    let handler = &service.children[0];
    assert_eq!(handler.name, "getUser");
    assert_eq!(handler.detail, "Handler");
    assert_eq!(handler.kind, SymbolKind::Method);
    assert_eq!(handler.selection_range, IdeRange::on_line(17, 13, 20));
}

#[test]
fn selection_skips_keyword_prefix_matches() {
    let symbols = extract_symbols("type ty {\n}\n");
    assert_eq!(symbols[0].selection_range, IdeRange::on_line(0, 5, 7));
}

#[test]
fn inline_closed_block_does_not_capture_following_lines() {
    let text = "type Empty {}\nId int64\n";
    let symbols = extract_symbols(text);
    assert_eq!(symbols.len(), 1);
    assert!(symbols[0].children.is_empty());
    assert_eq!(symbols[0].range, IdeRange::on_line(0, 0, 13));
}

#[test]
fn unterminated_block_keeps_opening_line_range() {
    let symbols = extract_symbols("enum Color {\n    Red;\n");
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].range, IdeRange::on_line(0, 0, 12));
    assert_eq!(symbols[0].children.len(), 1);
}

#[test]
fn new_opener_replaces_unclosed_block() {
    let text = "type A {\n    X int\ntype B {\n    Y string\n}\n";
    let symbols = extract_symbols(text);
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].children.len(), 1);
    assert_eq!(symbols[1].children[0].name, "Y");
    assert_eq!(symbols[0].range.end, IdePosition::new(0, 8));
    assert_eq!(symbols[1].range.end, IdePosition::new(4, 1));
}

#[test]
fn attr_and_extern_defs_produce_no_symbols() {
    let text = "@attr(\n    group: \"x\"\n)\n@externDefs {\n    name:\"T\", swaggerType:\"s\", importPath:\"t\"\n}\n";
    assert!(extract_symbols(text).is_empty());
}

#[test]
fn stray_close_is_ignored() {
    let symbols = extract_symbols("}\n)\ntype A {\n}\n");
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].range.start.line, 2);
}

#[test]
fn attr_inside_service_keeps_handlers_attached() {
    let text = "service {\n@attr(\nauth: \"jwt\"\n)\n@handler   getUser\nget /u(Req)\n}\n";
    let symbols = extract_symbols(text);
    assert_eq!(symbols.len(), 1);
    let service = &symbols[0];
    let handlers: Vec<_> = service.children.iter().map(|c| (c.name.as_str(), c.kind)).collect();
    assert_eq!(handlers, vec![("getUser", SymbolKind::Method)]);
    assert_eq!(service.range.end, IdePosition::new(6, 1));
}

#[test]
fn extern_defs_inside_type_keeps_fields_attached() {
    let text = "type User {\n@externDefs {\nname:\"T\", swaggerType:\"s\", importPath:\"t\"\n)\n}\nId int64\n}\n";
    let symbols = extract_symbols(text);
    assert_eq!(symbols.len(), 1);
    let fields: Vec<_> = symbols[0].children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(fields, vec!["Id"]);
    assert_eq!(symbols[0].range.end, IdePosition::new(6, 1));
}
