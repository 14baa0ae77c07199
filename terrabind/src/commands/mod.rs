mod completions;
mod fetch;
mod init;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fetch::FetchCommand;
use init::InitCommand;

/// Extension trait for exiting on pipeline errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for terrabind_fetch::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "terrabind")]
#[command(version)]
#[command(about = "Generate language-specific Terraform provider and module bindings")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Fetch(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a terrabind.json config file
    Init(InitCommand),

    /// Generate provider and module bindings
    Fetch(FetchCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
