use std::fs;

use super::*;

#[test]
fn finds_toml_in_same_dir() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("frgfmt.toml");
    fs::write(&toml_path, "indent_width = 2\n").unwrap();
    let source = dir.path().join("api.frg");
    fs::write(&source, "").unwrap();

    assert_eq!(find_frgfmt_toml(&source), Some(toml_path));
}

#[test]
fn finds_toml_in_parent_dir() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("frgfmt.toml");
    fs::write(&toml_path, "use_tab = true\n").unwrap();
    let nested = dir.path().join("api").join("v1");
    fs::create_dir_all(&nested).unwrap();
    let source = nested.join("user.frg");
    fs::write(&source, "").unwrap();

    assert_eq!(find_frgfmt_toml(&source), Some(toml_path));
}

#[test]
fn loads_indent_settings() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("frgfmt.toml");

    fs::write(&toml_path, "indent_width = 2\n").unwrap();
    assert_eq!(load_format_options(&toml_path).unwrap(), FormatOptions::new(2, false));

    fs::write(&toml_path, "use_tab = true\nfuture_option = \"x\"\n").unwrap();
    assert_eq!(load_format_options(&toml_path).unwrap().indent, "\t");
}

#[test]
fn indent_width_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("frgfmt.toml");
    fs::write(&toml_path, "indent_width = 0\n").unwrap();
    assert_eq!(load_format_options(&toml_path).unwrap().indent, " ");
    fs::write(&toml_path, "indent_width = 99\n").unwrap();
    assert_eq!(load_format_options(&toml_path).unwrap().indent.len(), MAX_INDENT_WIDTH);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("frgfmt.toml");
    fs::write(&toml_path, "indent_width = \"wide\"\n").unwrap();

    let error = load_format_options(&toml_path).unwrap_err();
    assert!(matches!(error, FormatConfigError::Parse { .. }));
    assert!(error.to_string().starts_with("invalid "));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_format_options(&dir.path().join("frgfmt.toml")).unwrap_err();
    assert!(matches!(error, FormatConfigError::Read { .. }));
}

#[test]
fn no_toml_means_default_options() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("api.frg");
    fs::write(&source, "").unwrap();
    // A frgfmt.toml further up (outside the temp dir) would change this.
    if find_frgfmt_toml(&source).is_none() {
        assert_eq!(resolve_format_options(&source).unwrap(), FormatOptions::default());
    }
}

#[test]
fn editor_options_map_to_indent() {
    let spaces = tower_lsp::lsp_types::FormattingOptions {
        tab_size: 2,
        insert_spaces: true,
        ..Default::default()
    };
    assert_eq!(editor_format_options(&spaces), FormatOptions::new(2, false));

    let tabs = tower_lsp::lsp_types::FormattingOptions {
        tab_size: 8,
        insert_spaces: false,
        ..Default::default()
    };
    assert_eq!(editor_format_options(&tabs).indent, "\t");

    let huge = tower_lsp::lsp_types::FormattingOptions {
        tab_size: 99,
        insert_spaces: true,
        ..Default::default()
    };
    assert_eq!(editor_format_options(&huge).indent.len(), MAX_INDENT_WIDTH);
}
