//! Tests for parsing chart tables from TOML.

use std::path::Path;

use crate::chart::Margin;
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::ChartError;

use super::mock_fs::MockFileSystem;

#[test]
fn partial_tables_keep_defaults() {
    let content = r##"
[bar]
colors = ["#111111", "#222222"]
show_labels = false

[area]
margin = 10
fill = true
"##;

    let fs = MockFileSystem::new().with_file("/charts.toml", content);
    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/charts.toml"))
        .unwrap()
        .config;

    assert_eq!(config.bar.colors, vec!["#111111", "#222222"]);
    assert!(!config.bar.show_labels);
    assert!((config.bar.bar_spacing - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.area.margin, Margin::uniform(10.0));
    assert!(config.area.fill);
    assert!(config.area.show_grid);
}

#[test]
fn margin_table_form() {
    let content = "[area.margin]\ntop = 5\nright = 6\nbottom = 7\nleft = 8\n";
    let fs = MockFileSystem::new().with_file("/c.toml", content);
    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/c.toml"))
        .unwrap()
        .config;
    assert_eq!(config.area.margin, Margin::new(5.0, 6.0, 7.0, 8.0));
}

#[test]
fn unknown_keys_are_ignored() {
    let content = "theme = \"dark\"\n[pie]\nholeSize = 0.9\nhole_size = 0.25\n";
    let fs = MockFileSystem::new().with_file("/c.toml", content);
    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/c.toml"))
        .unwrap()
        .config;
    assert!((config.pie.hole_size - 0.25).abs() < f64::EPSILON);
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/c.toml", "[bar\nwidth = ");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/c.toml"))
        .unwrap_err();
    assert!(matches!(err, ChartError::TomlParse(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/c.toml", "[line]\nsmooth = \"yes\"\n");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/c.toml"))
        .unwrap_err();
    assert!(matches!(err, ChartError::TomlParse(_)));
}

#[test]
fn missing_explicit_file_is_read_error() {
    let err = FileConfigLoader::with_fs(MockFileSystem::new())
        .load_from_path(Path::new("/nope.toml"))
        .unwrap_err();
    assert!(matches!(err, ChartError::FileRead { .. }));
    assert_eq!(err.error_type(), "IO");
}
