use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_render_bar_with_data() {
    let cli = Cli::parse_from(["beaned-charts", "render", "bar", "--data", "sales.json"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.kind, ChartKind::Bar);
            assert_eq!(args.data, PathBuf::from("sales.json"));
            assert!(args.output.is_none());
            assert!(args.width.is_none());
            assert_eq!(args.x_key, "date");
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_line_overrides() {
    let cli = Cli::parse_from([
        "beaned-charts",
        "render",
        "line",
        "-d",
        "-",
        "--width",
        "640",
        "--height",
        "320",
        "--smooth",
        "--fill",
        "-o",
        "out.svg",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.kind, ChartKind::Line);
            assert_eq!(args.data, PathBuf::from("-"));
            assert_eq!(args.width, Some(640.0));
            assert_eq!(args.height, Some(320.0));
            assert!(args.smooth);
            assert!(args.fill);
            assert_eq!(args.output, Some(PathBuf::from("out.svg")));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_pie_options() {
    let cli = Cli::parse_from([
        "beaned-charts",
        "render",
        "pie",
        "--data",
        "p.json",
        "--hole-size",
        "0.3",
        "--explode",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.hole_size, Some(0.3));
            assert!(args.explode);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_requires_data() {
    assert!(Cli::try_parse_from(["beaned-charts", "render", "bar"]).is_err());
}

#[test]
fn cli_render_rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["beaned-charts", "render", "radar", "--data", "x"]).is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["beaned-charts", "-vv", "--no-config", "demo"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.no_config);
    assert!(!cli.quiet);
    match cli.command {
        Commands::Demo(args) => assert!(args.output_dir.is_none()),
        _ => panic!("Expected Demo command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["beaned-charts", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".beaned-charts.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_show_json() {
    let cli = Cli::parse_from(["beaned-charts", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert!(config.is_none());
            assert_eq!(format, ConfigOutputFormat::Json);
        }
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn cli_config_validate_default_path() {
    let cli = Cli::parse_from(["beaned-charts", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from(".beaned-charts.toml")),
        _ => panic!("Expected Config Validate command"),
    }
}
