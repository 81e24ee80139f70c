use super::*;

#[test]
fn anchors_on_type_and_enum_names() {
    let text = "type User {\n}\n  enum Status {\n}\ntype Pair struct {\n}\nservice {\n}\n";
    let anchors = lens_anchors(text);
    assert_eq!(
        anchors,
        vec![
            LensAnchor {
                name: "User".into(),
                range: IdeRange::on_line(0, 5, 9),
            },
            LensAnchor {
                name: "Status".into(),
                range: IdeRange::on_line(2, 7, 13),
            },
        ]
    );
}

#[test]
fn title_counts_references() {
    assert_eq!(lens_title(0), "0 references");
    assert_eq!(lens_title(3), "3 references");
}
