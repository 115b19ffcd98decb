use bomfold_core::config::{dirs_path, GlobalConfig, OutputFormat};
use bomfold_core::manifest::BomPolicy;

#[test]
fn test_global_config_defaults() {
    let config = GlobalConfig::default();
    assert_eq!(config.manifest.default_file, "deps.manifest");
    assert_eq!(config.manifest.env_file, ".bomfold.env");
    assert_eq!(config.resolve.bom_policy, BomPolicy::Nearest);
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn test_global_config_empty_toml_uses_defaults() {
    let config = GlobalConfig::from_str("").unwrap();
    assert_eq!(config.manifest.default_file, "deps.manifest");
    assert_eq!(config.resolve.bom_policy, BomPolicy::Nearest);
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
[manifest]
default-file = "app/deps.toml"

[resolve]
bom-policy = "single"

[output]
format = "json"
"#;
    let config = GlobalConfig::from_str(toml).unwrap();
    assert_eq!(config.manifest.default_file, "app/deps.toml");
    assert_eq!(config.manifest.env_file, ".bomfold.env");
    assert_eq!(config.resolve.bom_policy, BomPolicy::Single);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.load_options().bom_policy, BomPolicy::Single);
}

#[test]
fn test_global_config_rejects_unknown_policy() {
    let result = GlobalConfig::from_str("[resolve]\nbom-policy = \"newest\"\n");
    assert!(result.is_err());
}

#[test]
fn test_load_from_missing_file_fails() {
    let result = GlobalConfig::load_from(std::path::Path::new("/nonexistent/config.toml"));
    assert!(result.is_err());
}

#[test]
fn test_dirs_path_contains_bomfold() {
    assert!(dirs_path().ends_with(".bomfold"));
}

#[test]
fn test_output_format_from_name() {
    assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::from_name("yaml"), None);
}
