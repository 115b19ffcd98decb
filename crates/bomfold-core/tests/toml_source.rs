use bomfold_core::entry::RawEntry;
use bomfold_core::error::ManifestError;
use bomfold_core::source::parse_toml;

#[test]
fn parse_entry_tables_in_order() {
    let toml = r#"
[[entry]]
kind = "flag"
key = "multiDexEnabled"
value = true

[[entry]]
kind = "dependency"
scope = "platform-bom"
coordinate = "com.google.firebase:firebase-bom"
version = "32.7.0"

[[entry]]
kind = "dependency"
scope = "dependency"
coordinate = "com.google.firebase:firebase-analytics"

[[entry]]
kind = "plugin"
id = "com.google.gms.google-services"
"#;
    let entries = parse_toml(toml).unwrap();
    assert_eq!(
        entries,
        vec![
            RawEntry::flag("multiDexEnabled", true),
            RawEntry::bom("com.google.firebase:firebase-bom", "32.7.0"),
            RawEntry::dependency("com.google.firebase:firebase-analytics", None),
            RawEntry::plugin("com.google.gms.google-services"),
        ]
    );
}

#[test]
fn empty_document_has_no_entries() {
    assert!(parse_toml("").unwrap().is_empty());
}

#[test]
fn unknown_kind_is_syntax_error() {
    let toml = r#"
[[entry]]
kind = "flag"
key = "a"
value = true

[[entry]]
kind = "repository"
url = "https://maven.google.com"
"#;
    let err = parse_toml(toml).unwrap_err();
    assert!(matches!(err, ManifestError::Syntax { .. }), "got: {err:?}");
}

#[test]
fn non_boolean_flag_is_syntax_error() {
    let toml = "[[entry]]\nkind = \"flag\"\nkey = \"multiDexEnabled\"\nvalue = \"yes\"\n";
    assert!(matches!(
        parse_toml(toml).unwrap_err(),
        ManifestError::Syntax { .. }
    ));
}
