use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::chart::{AreaChart, BarChart, Chart, LineChart, PieChart};
use crate::cli::{Cli, DemoArgs};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::svg::{AreaData, AreaSeries, DataPoint};
use crate::EXIT_SUCCESS;

use super::{exit_code_for, load_config, print_error};

/// A sample chart and the file stem it is written under.
pub type DemoChart = (&'static str, Box<dyn Chart + Send + Sync>);

const AREA_DAYS: [(&str, f64, f64); 14] = [
    ("2024-01-01", 222.0, 150.0),
    ("2024-01-02", 97.0, 180.0),
    ("2024-01-03", 167.0, 120.0),
    ("2024-01-04", 242.0, 260.0),
    ("2024-01-05", 373.0, 290.0),
    ("2024-01-06", 301.0, 340.0),
    ("2024-01-07", 245.0, 180.0),
    ("2024-01-08", 409.0, 320.0),
    ("2024-01-09", 59.0, 110.0),
    ("2024-01-10", 261.0, 190.0),
    ("2024-01-11", 327.0, 350.0),
    ("2024-01-12", 292.0, 210.0),
    ("2024-01-13", 138.0, 230.0),
    ("2024-01-14", 387.0, 290.0),
];

/// The bundled samples, built on top of `config`.
#[must_use]
pub fn demo_charts(config: &ChartConfig) -> Vec<DemoChart> {
    let bar_data = [
        ("Jan", 120.0),
        ("Feb", 190.0),
        ("Mar", 300.0),
        ("Apr", 250.0),
        ("May", 420.0),
    ]
    .into_iter()
    .map(|(label, value)| DataPoint::new(label, value))
    .collect();

    let line_data = [30.0, 45.0, 35.0, 50.0, 65.0, 40.0, 55.0]
        .into_iter()
        .map(DataPoint::unlabeled)
        .collect();
    let mut line_options = config.line.clone();
    line_options.smooth = true;
    line_options.fill = true;
    line_options.color = Some("#10b981".to_string());
    line_options.id_prefix = "demo-line".to_string();

    let pie_data = [
        ("Product A", 35.0),
        ("Product B", 25.0),
        ("Product C", 20.0),
        ("Product D", 15.0),
        ("Product E", 5.0),
    ]
    .into_iter()
    .map(|(label, value)| DataPoint::new(label, value))
    .collect();
    let mut pie_options = config.pie.clone();
    pie_options.width = 400.0;
    pie_options.height = 400.0;
    pie_options.hole_size = 0.3;
    pie_options.explode_slices = true;

    let area_data = AreaData {
        categories: AREA_DAYS.iter().map(|(day, ..)| (*day).to_string()).collect(),
        series: vec![
            AreaSeries::new("desktop", AREA_DAYS.iter().map(|d| d.1).collect()),
            AreaSeries::new("mobile", AREA_DAYS.iter().map(|d| d.2).collect()),
        ],
    };
    let mut area_options = config.area.clone();
    area_options.smooth = true;
    area_options.fill = true;
    area_options.id_prefix = "demo-area".to_string();

    vec![
        ("bar", boxed(BarChart::new(bar_data, config.bar.clone()))),
        ("line", boxed(LineChart::new(line_data, line_options))),
        ("donut", boxed(PieChart::new(pie_data, pie_options))),
        ("area", boxed(AreaChart::new(area_data, area_options))),
    ]
}

fn boxed<C: Chart + Send + Sync + 'static>(chart: C) -> Box<dyn Chart + Send + Sync> {
    Box::new(chart)
}

#[must_use]
pub fn run_demo(args: &DemoArgs, cli: &Cli) -> i32 {
    match run_demo_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Renders every sample in parallel, then writes or prints them in order.
///
/// # Errors
/// Returns an error if config loading, rendering or writing fails.
pub fn run_demo_impl(args: &DemoArgs, cli: &Cli) -> Result<()> {
    let config = load_config(None, cli.no_config)?;
    let charts = demo_charts(&config);

    let rendered = charts
        .par_iter()
        .map(|(name, chart)| chart.render().map(|svg| (*name, svg)))
        .collect::<Result<Vec<_>>>()?;

    match &args.output_dir {
        Some(dir) => write_all(dir, &rendered, cli.quiet),
        None => {
            for (name, svg) in &rendered {
                println!("<!-- {name} -->");
                println!("{svg}");
            }
            Ok(())
        }
    }
}

fn write_all(dir: &Path, rendered: &[(&str, String)], quiet: bool) -> Result<()> {
    fs::create_dir_all(dir)?;
    for (name, svg) in rendered {
        let path = dir.join(format!("{name}.svg"));
        fs::write(&path, svg)?;
        log::debug!("wrote {}", path.display());
        if !quiet {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
