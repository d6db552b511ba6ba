use std::fs;

use crate::cli::InitArgs;
use crate::error::{ChartError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::print_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the commented default configuration.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# beaned-charts configuration file
# Every key is optional; omitted keys use the built-in defaults.

version = "1"

[bar]
width = 500
height = 300
padding = 40
# Fraction of each slot left empty between bars, in [0, 1)
bar_spacing = 0.2
show_labels = true
show_tooltips = true
hover_effects = true
# colors = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6"]

[line]
width = 500
height = 300
padding = 40
# Stroke color; defaults to the first entry of `colors`
# color = "#10b981"
smooth = false
# Gradient under the line
fill = false
show_points = true
show_labels = true
show_tooltips = true
hover_effects = true
# Prefix for gradient ids; change it when embedding several charts in one page
id_prefix = "chart"

[pie]
width = 500
height = 300
padding = 40
# Donut hole as a fraction of the radius, in [0, 1); 0 draws a full pie
hole_size = 0.0
explode_slices = false
explode_offset = 8
# Degrees; 0 points right and angles grow clockwise
start_angle = -90
show_labels = true
show_tooltips = true
hover_effects = true

[area]
width = 500
height = 300
smooth = false
fill = false
show_grid = true
show_axes = true
show_tooltips = true
hover_effects = true
id_prefix = "chart"
# A single number applies to every side
margin = { top = 20, right = 30, bottom = 20, left = 50 }
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
