use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/commands.rs"]
mod commands;
#[path = "main/shared.rs"]
mod shared;

use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Run {
            file,
            tree,
            analysis,
        } => commands::cmd_run(file, *tree, *analysis),
    }
}
