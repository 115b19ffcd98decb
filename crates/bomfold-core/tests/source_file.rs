use bomfold_core::entry::RawEntry;
use bomfold_core::manifest::Manifest;
use bomfold_core::source::read_entries;
use std::fs;
use tempfile::TempDir;

#[test]
fn read_text_manifest_with_env_interpolation() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".bomfold.env"), "FIREBASE_BOM=32.7.0\n").unwrap();
    fs::write(
        tmp.path().join("deps.manifest"),
        "platform-bom: firebase-bom@${env:FIREBASE_BOM}\n\
         dependency: firebase-analytics\n",
    )
    .unwrap();

    let entries = read_entries(&tmp.path().join("deps.manifest"), ".bomfold.env").unwrap();
    assert_eq!(
        entries,
        vec![
            RawEntry::bom("firebase-bom", "32.7.0"),
            RawEntry::dependency("firebase-analytics", None),
        ]
    );

    let resolved = Manifest::load(entries).unwrap().resolve_versions().unwrap();
    assert_eq!(resolved.dependencies().next().unwrap().version, "32.7.0");
}

#[test]
fn read_toml_manifest_by_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("deps.toml");
    fs::write(
        &path,
        "[[entry]]\nkind = \"plugin\"\nid = \"google-services\"\n",
    )
    .unwrap();

    let entries = read_entries(&path, ".bomfold.env").unwrap();
    assert_eq!(entries, vec![RawEntry::plugin("google-services")]);
}

#[test]
fn read_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let err = read_entries(&tmp.path().join("deps.manifest"), ".bomfold.env").unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}

#[test]
fn syntax_errors_surface_through_read() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("deps.manifest");
    fs::write(&path, "not an entry\n").unwrap();
    let err = read_entries(&path, ".bomfold.env").unwrap_err();
    assert!(err.to_string().contains("line 1"), "got: {err}");
}
