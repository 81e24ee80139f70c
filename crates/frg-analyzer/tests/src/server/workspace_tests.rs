use std::fs;

use tower_lsp::lsp_types::Url;

use super::*;

fn write(
    root: &Path,
    relative: &str,
    text: &str,
) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, text).unwrap();
    path
}

fn sources(
    root: &Path,
    settings: WorkspaceSettings,
) -> WorkspaceSources {
    WorkspaceSources::new(vec![root.to_path_buf()], settings, Arc::new(DocumentStore::new()))
}

fn relative(
    root: &Path,
    files: Vec<PathBuf>,
) -> Vec<String> {
    files.iter().map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")).collect()
}

#[tokio::test]
async fn lists_files_by_extension_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "b.frg", "");
    write(root, "a.frg", "");
    write(root, "api/user.frg", "");
    write(root, "logic/user.go", "");
    write(root, "notes.txt", "");

    let sources = sources(root, WorkspaceSettings::default());
    assert_eq!(relative(root, sources.list_files(SourceSet::Frg).await), vec!["a.frg", "api/user.frg", "b.frg"]);
    assert_eq!(relative(root, sources.list_files(SourceSet::Implementation).await), vec!["logic/user.go"]);
}

#[tokio::test]
async fn skips_excluded_and_hidden_directories() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "node_modules/pkg/x.frg", "");
    write(root, "web/node_modules/y.frg", "");
    write(root, ".git/z.frg", "");
    write(root, "gen/api/out.frg", "");
    write(root, "api/keep.frg", "");

    let settings = WorkspaceSettings {
        exclude_paths: vec!["node_modules".to_string(), "gen/api".to_string()],
        ..WorkspaceSettings::default()
    };
    let sources = sources(root, settings);
    assert_eq!(relative(root, sources.list_files(SourceSet::Frg).await), vec!["api/keep.frg"]);
}

#[tokio::test]
async fn skips_files_above_size_cap() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "small.frg", "type A {\n}\n");
    write(root, "huge.frg", &"x".repeat(20 * 1024));

    let settings = WorkspaceSettings {
        max_file_size_kb: 16,
        ..WorkspaceSettings::default()
    };
    let sources = sources(root, settings);
    assert_eq!(relative(root, sources.list_files(SourceSet::Frg).await), vec!["small.frg"]);
}

#[tokio::test]
async fn open_document_text_wins_over_disk() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let path = write(root, "api.frg", "on disk");
    let store = Arc::new(DocumentStore::new());
    store.open(Url::from_file_path(&path).unwrap(), "unsaved".to_string(), 2);

    let sources = WorkspaceSources::new(vec![root.to_path_buf()], WorkspaceSettings::default(), store);
    assert_eq!(sources.read_file(&path).await.unwrap(), "unsaved");

    let other = write(root, "other.frg", "disk only");
    assert_eq!(sources.read_file(&other).await.unwrap(), "disk only");
    assert!(sources.read_file(&root.join("missing.frg")).await.is_err());
}
