use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "wayfinder",
    version,
    about = "Build weighted undirected graphs and query shortest paths"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log graph mutations and query statistics to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Execute a session script (`-` reads stdin)
    Run {
        /// Path to the script file
        script: String,
        /// Stop at the first failing line
        #[arg(long)]
        strict: bool,
    },

    /// Read session commands interactively
    Repl,
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
