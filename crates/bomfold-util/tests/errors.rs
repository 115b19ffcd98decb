use bomfold_util::errors::BomfoldError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = BomfoldError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = BomfoldError::Manifest {
        message: "Could not find deps.manifest".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Manifest error: Could not find deps.manifest"
    );
}

#[test]
fn test_config_error_display() {
    let err = BomfoldError::Config {
        message: "bad bom-policy".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: bad bom-policy");
}

#[test]
fn test_output_error_display() {
    let err = BomfoldError::Output {
        message: "json failed".to_string(),
    };
    assert_eq!(err.to_string(), "Output error: json failed");
}

#[test]
fn test_generic_error_display() {
    let err = BomfoldError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: BomfoldError = io_err.into();
    assert!(matches!(err, BomfoldError::Io(_)));
}
