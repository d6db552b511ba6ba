use clap::Parser;
use log::LevelFilter;

use beaned_charts::cli::{Cli, Commands};
use beaned_charts::commands::{run_config, run_demo, run_init, run_render};

const fn log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::Error;
    }
    match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG, when set, overrides the -v/-q level.
    env_logger::Builder::new()
        .filter_level(log_level(&cli))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Demo(args) => run_demo(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
