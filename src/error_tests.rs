use std::path::PathBuf;

use super::*;

#[test]
fn error_display_non_finite_value() {
    let err = ChartError::NonFiniteValue {
        index: 2,
        value: f64::NAN,
    };
    assert_eq!(err.to_string(), "Non-finite value NaN at data index 2");
}

#[test]
fn error_display_config() {
    let err = ChartError::Config("hole_size must be below 1".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: hole_size must be below 1"
    );
}

#[test]
fn error_display_file_read() {
    let err = ChartError::FileRead {
        path: PathBuf::from("sales.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("sales.json"));
}

#[test]
fn error_type_returns_category() {
    assert_eq!(ChartError::InvalidData("x".to_string()).error_type(), "Data");
    assert_eq!(ChartError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(ChartError::Io(std::io::Error::other("x")).error_type(), "IO");

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(ChartError::from(json_err).error_type(), "JSON");
}

#[test]
fn toml_errors_convert() {
    let toml_err = toml::from_str::<toml::Table>("width = ").unwrap_err();
    let err = ChartError::from(toml_err);
    assert!(err.to_string().starts_with("TOML parse error"));
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn data_errors_are_flagged() {
    assert!(
        ChartError::NonFiniteValue {
            index: 0,
            value: f64::INFINITY
        }
        .is_data_error()
    );
    assert!(!ChartError::Config("x".to_string()).is_data_error());

    let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
    assert!(ChartError::from(json_err).is_data_error());
}
