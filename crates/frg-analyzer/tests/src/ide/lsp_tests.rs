use super::*;

fn location(
    path: &str,
    line: u32,
) -> IdeLocation {
    IdeLocation::new(path, IdeRange::line_start(line))
}

#[test]
fn no_hits_is_no_response() {
    assert_eq!(locations_to_definition_response(Vec::new()), None);
}

#[test]
fn single_hit_is_scalar() {
    let response = locations_to_definition_response(vec![location("/api/user.frg", 4)]);
    let Some(GotoDefinitionResponse::Scalar(found)) = response else {
        panic!("expected scalar response, got {response:?}");
    };
    assert_eq!(found.uri.path(), "/api/user.frg");
    assert_eq!(found.range, Range::new(Position::new(4, 0), Position::new(4, 0)));
}

#[test]
fn several_hits_keep_their_order() {
    let response = locations_to_definition_response(vec![location("/b.frg", 1), location("/a.frg", 2)]);
    let Some(GotoDefinitionResponse::Array(found)) = response else {
        panic!("expected array response, got {response:?}");
    };
    let paths: Vec<_> = found.iter().map(|l| l.uri.path()).collect();
    assert_eq!(paths, vec!["/b.frg", "/a.frg"]);
}

#[test]
fn relative_paths_are_dropped() {
    let locations = ide_locations_to_lsp(vec![location("relative.frg", 0), location("/abs.frg", 0)]);
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].uri.path(), "/abs.frg");
}

#[test]
fn ranges_convert_field_by_field() {
    let range = ide_range_to_lsp(IdeRange::on_line(3, 5, 9));
    assert_eq!(range, Range::new(Position::new(3, 5), Position::new(3, 9)));
    assert_eq!(lsp_position_to_ide(Position::new(7, 2)), IdePosition::new(7, 2));
}
