use std::fmt::Write as _;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{ChartConfig, ConfigIssue, ConfigLoader, FileConfigLoader, validate_config};
use crate::error::{ChartError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::print_error;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config)
        }
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(issues) if issues.is_empty() => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Ok(issues) => {
            eprintln!("Configuration has {} problem(s):", issues.len());
            for issue in &issues {
                eprintln!("  {issue}");
            }
            EXIT_CONFIG_ERROR
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads a configuration file and lists its semantic problems.
///
/// # Errors
/// Returns an error if the file doesn't exist, is invalid TOML, or declares
/// an unsupported version.
pub fn run_config_validate_impl(config_path: &Path) -> Result<Vec<ConfigIssue>> {
    if !config_path.exists() {
        return Err(ChartError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let result = FileConfigLoader::new().load_from_path(config_path)?;
    Ok(validate_config(&result.config))
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, no_config: bool) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration, with every default filled in.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let (config, source) = if no_config && config_path.is_none() {
        (ChartConfig::default(), None)
    } else {
        let loader = FileConfigLoader::new();
        let result =
            config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
        (result.config, result.source)
    };

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => format_config_text(&config, source.as_deref()),
    }
}

/// TOML rendering of `config`, headed by where it was loaded from.
///
/// # Errors
/// Returns an error if the config cannot be serialized as TOML.
pub fn format_config_text(config: &ChartConfig, source: Option<&Path>) -> Result<String> {
    let mut output = String::new();
    match source {
        Some(path) => {
            let _ = writeln!(output, "# Source: {}", path.display());
        }
        None => output.push_str("# Source: built-in defaults\n"),
    }
    output.push('\n');
    output.push_str(&toml::to_string(config)?);
    Ok(output)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
