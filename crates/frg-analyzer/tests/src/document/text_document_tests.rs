use super::*;

fn test_doc(text: &str) -> Document {
    Document::new(Url::parse("file:///ws/api.frg").unwrap(), text.to_string(), 1)
}

fn edit(
    start: (u32, u32),
    end: (u32, u32),
    text: &str,
) -> TextDocumentContentChangeEvent {
    TextDocumentContentChangeEvent {
        range: Some(Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))),
        range_length: None,
        text: text.to_string(),
    }
}

#[test]
fn line_offsets_empty() {
    let doc = test_doc("");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line_text(0), Some(""));
}

#[test]
fn line_text_strips_crlf() {
    let doc = test_doc("type A {\r\n}\r\n");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_text(0), Some("type A {"));
    assert_eq!(doc.line_text(1), Some("}"));
    assert_eq!(doc.line_text(3), None);
}

#[test]
fn offset_roundtrip() {
    let doc = test_doc("type A {\n    Id int64\n}\n");
    let pos = Position::new(1, 4);
    let off = doc.offset_of(pos).unwrap();
    assert_eq!(off, 13);
    assert_eq!(doc.position_of(off), pos);
}

#[test]
fn offset_clamps_long_column() {
    let doc = test_doc("ab\ncd");
    assert_eq!(doc.offset_of(Position::new(0, 99)), Some(2));
    assert_eq!(doc.offset_of(Position::new(5, 0)), None);
}

#[test]
fn full_range_ends_after_last_line() {
    let doc = test_doc("type A {\n}\n");
    assert_eq!(doc.full_range(), Range::new(Position::new(0, 0), Position::new(2, 0)));
}

#[test]
fn text_in_range() {
    let doc = test_doc("type A {\n    Id int64\n}\n");
    let range = Range::new(Position::new(1, 0), Position::new(2, 1));
    assert_eq!(doc.text_in(range), Some("    Id int64\n}"));
}

#[test]
fn word_at_handler_name() {
    let doc = test_doc("service {\n    @handler getUser\n}");
    let (word, range) = doc.word_at(Position::new(1, 15)).unwrap();
    assert_eq!(word, "getUser");
    assert_eq!(range, Range::new(Position::new(1, 13), Position::new(1, 20)));
    assert!(doc.word_at(Position::new(1, 2)).is_none());
}

#[test]
fn incremental_change() {
    let mut doc = test_doc("type User {\n}\n");
    doc.apply_changes(vec![edit((0, 5), (0, 9), "Account")], 2);
    assert_eq!(doc.text, "type Account {\n}\n");
    assert_eq!(doc.version, 2);
}

#[test]
fn sequential_changes_see_previous_edits() {
    let mut doc = test_doc("type A {\n}\n");
    doc.apply_changes(vec![edit((0, 8), (0, 8), "\n    Id int64"), edit((1, 4), (1, 6), "Key")], 3);
    assert_eq!(doc.text, "type A {\n    Key int64\n}\n");
    assert_eq!(doc.line_text(1), Some("    Key int64"));
}

#[test]
fn full_content_change() {
    let mut doc = test_doc("old content");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "enum E {\n}\n".to_string(),
        }],
        3,
    );
    assert_eq!(doc.text, "enum E {\n}\n");
    assert_eq!(doc.version, 3);
    assert_eq!(doc.line_count(), 3);
}
