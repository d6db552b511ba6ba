//! Tests for config file discovery (current dir, user config, fallback).

use std::path::PathBuf;

use crate::config::{ChartConfig, ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, ChartConfig::default());
    assert!(result.source.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.beaned-charts.toml", "[bar]\nwidth = 640\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!((result.config.bar.width - 640.0).abs() < f64::EPSILON);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/my/project/.beaned-charts.toml"))
    );
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/testuser/.config/beaned-charts")))
        .with_file(
            "/home/testuser/.config/beaned-charts/config.toml",
            "[pie]\nhole_size = 0.4\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!((result.config.pie.hole_size - 0.4).abs() < f64::EPSILON);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.beaned-charts.toml", "[line]\nsmooth = true\n")
        .with_file(
            "/home/user/.config/beaned-charts/config.toml",
            "[line]\nsmooth = false\nfill = true\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap().config;

    assert!(config.line.smooth);
    assert!(!config.line.fill);
}

#[test]
fn missing_config_dir_falls_back_to_defaults() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(result.source.is_none());
}
