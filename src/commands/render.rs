use std::fs;
use std::io::{self, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::chart::{AreaChart, BarChart, Chart, LineChart, PieChart};
use crate::cli::{ChartKind, Cli, RenderArgs};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::svg::{AreaData, DataPoint};
use crate::EXIT_SUCCESS;

use super::{exit_code_for, load_config, print_error};

/// Area input: either records keyed by `--x-key`, or explicit categories and series.
#[derive(Deserialize)]
#[serde(untagged)]
enum AreaInput {
    Rows(Vec<IndexMap<String, Value>>),
    Table(AreaData),
}

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Renders one chart from `args.data` to stdout or `args.output`.
///
/// # Errors
/// Returns an error if config or data cannot be read, the data is malformed,
/// or the output cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let input = read_data(&args.data)?;

    let chart = build_chart(args.kind, &input, config, args)?;
    let svg = chart.render()?;

    match &args.output {
        Some(path) => {
            fs::write(path, &svg)?;
            log::info!("wrote {:?} chart to {}", args.kind, path.display());
            if !cli.quiet {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => println!("{svg}"),
    }
    Ok(())
}

fn read_data(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    fs::read_to_string(path).map_err(|source| ChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the chart for `kind` from JSON `input`, starting from the config
/// table for that kind and applying command-line overrides on top.
///
/// # Errors
/// Returns `Json` when `input` does not match the expected shape and
/// `InvalidData` when area records lack the category key.
pub fn build_chart(
    kind: ChartKind,
    input: &str,
    config: ChartConfig,
    args: &RenderArgs,
) -> Result<Box<dyn Chart>> {
    let chart: Box<dyn Chart> = match kind {
        ChartKind::Bar => {
            let mut options = config.bar;
            override_common(args, &mut options.width, &mut options.height, &mut options.title);
            Box::new(BarChart::new(parse_points(input)?, options))
        }
        ChartKind::Line => {
            let mut options = config.line;
            override_common(args, &mut options.width, &mut options.height, &mut options.title);
            options.smooth |= args.smooth;
            options.fill |= args.fill;
            Box::new(LineChart::new(parse_points(input)?, options))
        }
        ChartKind::Pie => {
            let mut options = config.pie;
            override_common(args, &mut options.width, &mut options.height, &mut options.title);
            if let Some(hole_size) = args.hole_size {
                options.hole_size = hole_size;
            }
            options.explode_slices |= args.explode;
            Box::new(PieChart::new(parse_points(input)?, options))
        }
        ChartKind::Area => {
            let mut options = config.area;
            override_common(args, &mut options.width, &mut options.height, &mut options.title);
            options.smooth |= args.smooth;
            options.fill |= args.fill;
            let data = match serde_json::from_str::<AreaInput>(input)? {
                AreaInput::Rows(rows) => AreaData::from_rows(&rows, &args.x_key)?,
                AreaInput::Table(data) => data,
            };
            Box::new(AreaChart::new(data, options))
        }
    };
    Ok(chart)
}

fn parse_points(input: &str) -> Result<Vec<DataPoint>> {
    let points: Vec<DataPoint> = serde_json::from_str(input)?;
    log::debug!("parsed {} data points", points.len());
    Ok(points)
}

fn override_common(
    args: &RenderArgs,
    width: &mut f64,
    height: &mut f64,
    title: &mut Option<String>,
) {
    if let Some(w) = args.width {
        *width = w;
    }
    if let Some(h) = args.height {
        *height = h;
    }
    if args.title.is_some() {
        title.clone_from(&args.title);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
