use bomfold_util::fs::{ensure_dir, find_ancestor_with, write_with_parents};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("deps.manifest"), "").unwrap();
    let result = find_ancestor_with(tmp.path(), "deps.manifest");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("deps.manifest"), "").unwrap();
    let nested = tmp.path().join("app").join("src").join("main");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "deps.manifest");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("x").join("y");
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn test_ensure_dir_existing_is_ok() {
    let tmp = TempDir::new().unwrap();
    ensure_dir(tmp.path()).unwrap();
    assert!(tmp.path().is_dir());
}

#[test]
fn test_write_with_parents_creates_directories() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("build").join("resolved.manifest");
    write_with_parents(&out, "plugin: google-services\n").unwrap();
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "plugin: google-services\n"
    );
}
