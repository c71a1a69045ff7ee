mod backend;
mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::init::InitArgs;
use commands::run::RunArgs;

#[derive(Parser)]
#[command(
    name = "curtain",
    version,
    about = "A borderless, always-on-top overlay for hiding part of the screen",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the overlay (the default when no subcommand is given)
    Run(RunArgs),
    /// Create the default configuration file
    Init(InitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run(args)) => commands::run::execute(&args),
        Some(Commands::Init(args)) => commands::init::execute(&args),
        None => commands::run::execute(&cli.run),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
