pub mod config;
pub mod demo;
pub mod init;
pub mod render;

use std::path::Path;

use crate::config::{ChartConfig, ConfigLoader, FileConfigLoader, validate_config};
use crate::error::{ChartError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_DATA_ERROR};

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use demo::{demo_charts, run_demo, run_demo_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{build_chart, run_render, run_render_impl};

/// Loads the effective configuration for a command.
///
/// An explicit `path` wins over discovery; `no_config` skips both. Semantic
/// problems are logged as warnings and do not stop the command.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<ChartConfig> {
    if no_config {
        log::debug!("--no-config given, using defaults");
        return Ok(ChartConfig::default());
    }

    let loader = FileConfigLoader::new();
    let result = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };

    for issue in validate_config(&result.config) {
        log::warn!("config {issue}");
    }
    Ok(result.config)
}

/// Prints a command failure to stderr, tagged with its category.
pub fn print_error(error: &ChartError) {
    eprintln!("Error: [{}] {error}", error.error_type());
}

/// Exit code for a failed command.
#[must_use]
pub const fn exit_code_for(error: &ChartError) -> i32 {
    if error.is_data_error() {
        EXIT_DATA_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}
