use super::*;

#[test]
fn lines_strip_carriage_returns() {
    let collected: Vec<&str> = lines("type A {\r\n}\r\n").collect();
    assert_eq!(collected, vec!["type A {", "}", ""]);
}

#[test]
fn utf16_columns_count_surrogate_pairs() {
    let line = "// 🦀 Crab";
    let byte = line.find("Crab").unwrap();
    assert_eq!(utf16_column_of_byte_offset(line, byte), 6);
    assert_eq!(utf16_len(line), 10);
}

#[test]
fn byte_offset_round_trips_column() {
    let line = "é Name";
    let column = utf16_column_of_byte_offset(line, line.find("Name").unwrap());
    assert_eq!(byte_offset_of_utf16_column(line, column), line.find("Name").unwrap());
    assert_eq!(byte_offset_of_utf16_column(line, 99), line.len());
}

#[test]
fn mid_character_offsets_round_down() {
    assert_eq!(utf16_column_of_byte_offset("é", 1), 0);
}

#[test]
fn word_at_selects_identifier_around_cursor() {
    let line = "    @handler getUser";
    assert_eq!(word_at(line, 15), Some("getUser"));
    assert_eq!(word_at(line, 13), Some("getUser"));
    assert_eq!(word_at(line, 20), Some("getUser"));
    assert_eq!(word_at(line, 6), Some("handler"));
}

#[test]
fn word_at_whitespace_is_none() {
    assert_eq!(word_at("type  A {", 5), None);
    assert_eq!(word_at("", 0), None);
    assert_eq!(word_at("{ }", 1), None);
}
