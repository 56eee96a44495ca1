//! wayfinder CLI: build weighted undirected graphs and query shortest paths.
//!
//! This binary provides the `wayfinder` command with `run` (execute a session
//! script) and `repl` (interactive session). See `wayfinder --help` for usage.

use clap::Parser;
use tracing::Level;
use wayfinder_core::config::{OutputFormat, WayfinderConfig};

mod cli_args;
mod commands;
mod session;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match std::env::current_dir() {
        Ok(cwd) => WayfinderConfig::load(&cwd.join(".wayfinder")),
        Err(e) => {
            eprintln!("wayfinder: warning: failed to get current directory: {}, using defaults", e);
            WayfinderConfig::default()
        }
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let formatter = wayfinder_output::formatter_for(format);

    let exit_code = match cli.command {
        Commands::Run { script, strict } => {
            commands::run::run(formatter, &config, cli.verbose, script, strict)
        }
        Commands::Repl => commands::repl::run(formatter, &config),
    };

    std::process::exit(exit_code);
}
