use anyhow::Result;
use clap::Parser;
use storyscribe::cli::{Cli, Commands};
use storyscribe::commands::{create_formatting_config, handle_analyze, handle_init, AnalyzeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            complex_threshold,
            color,
            plain,
            verbosity: _,
        } => {
            let config = AnalyzeConfig {
                path,
                format: format.map(Into::into),
                output,
                complex_threshold: complex_threshold.map(|n| n as usize),
                formatting: create_formatting_config(plain, color),
            };
            handle_analyze(config, &storyscribe::config::load_config())
        }
        Commands::Init { force } => handle_init(&std::env::current_dir()?, force),
    }
}

// RUST_LOG wins over -v
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
