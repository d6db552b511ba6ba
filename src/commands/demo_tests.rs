use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn cli() -> Cli {
    Cli {
        verbose: 0,
        quiet: true,
        no_config: true,
        command: Commands::Demo(DemoArgs { output_dir: None }),
    }
}

#[test]
fn demo_has_four_named_charts() {
    let names: Vec<&str> = demo_charts(&ChartConfig::default())
        .iter()
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(names, ["bar", "line", "donut", "area"]);
}

#[test]
fn every_demo_chart_renders() {
    for (name, chart) in demo_charts(&ChartConfig::default()) {
        let svg = chart.render().unwrap();
        assert!(svg.starts_with("<svg"), "{name} did not render an svg root");
        assert!(!svg.contains("No data available"), "{name} rendered empty");
    }
}

#[test]
fn demo_donut_uses_square_canvas() {
    let charts = demo_charts(&ChartConfig::default());
    let (_, donut) = &charts[2];
    let svg = donut.render().unwrap();
    assert!(svg.starts_with(r#"<svg width="400" height="400""#));
    assert_eq!(svg.matches(r#"<path class="slice""#).count(), 5);
}

#[test]
fn demo_area_has_both_series() {
    let charts = demo_charts(&ChartConfig::default());
    let svg = charts[3].1.render().unwrap();
    assert!(svg.contains("<title>desktop</title>"));
    assert!(svg.contains("<title>mobile</title>"));
}

#[test]
fn demo_writes_one_file_per_chart() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let args = DemoArgs {
        output_dir: Some(out_dir.clone()),
    };

    assert_eq!(run_demo(&args, &cli()), EXIT_SUCCESS);
    for name in ["bar", "line", "donut", "area"] {
        let svg = std::fs::read_to_string(out_dir.join(format!("{name}.svg"))).unwrap();
        assert!(svg.ends_with("</svg>"));
    }
}
