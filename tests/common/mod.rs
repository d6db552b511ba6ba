#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the beaned-charts binary.
#[macro_export]
macro_rules! beaned_charts {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("beaned-charts"))
    };
}

/// Temporary working directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `relative_path` and returns the full path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a local `.beaned-charts.toml`.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".beaned-charts.toml", content)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Labelled points accepted by bar, line and pie charts.
pub const SALES_DATA: &str = r#"[
    {"label": "Jan", "value": 120},
    {"label": "Feb", "value": 190},
    {"label": "Mar", "value": 300}
]"#;

/// Area records keyed by `date`.
pub const TRAFFIC_DATA: &str = r#"[
    {"date": "2024-01-01", "desktop": 222, "mobile": 150},
    {"date": "2024-01-02", "desktop": 97, "mobile": 180},
    {"date": "2024-01-03", "desktop": 167, "mobile": 120}
]"#;
