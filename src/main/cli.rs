use clap::{Parser as ClapParser, Subcommand};

#[derive(ClapParser)]
#[command(name = "boink", about = "The Boink language interpreter")]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Subcommand)]
pub(super) enum Commands {
    /// Run a Boink file
    Run {
        file: String,
        /// Print the parsed program tree
        #[arg(long)]
        tree: bool,
        /// Print the semantic analysis log
        #[arg(long)]
        analysis: bool,
    },
}
