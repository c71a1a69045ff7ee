use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use curtain_core::config;

/// Arguments for the `init` subcommand.
#[derive(Args)]
pub struct InitArgs {
    /// Where to write the file (default: ~/.config/curtain/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// Writes a commented default `config.toml`.
///
/// An existing file is left alone unless `--force` is given.
pub fn execute(args: &InitArgs) -> anyhow::Result<()> {
    let path = config::resolve_path(args.config.as_deref())
        .context("could not determine home directory")?;

    let written = config::write_template(&path, args.force)
        .with_context(|| format!("could not write {}", path.display()))?;

    if written {
        println!("Created {}", path.display());
        println!("\nEdit this file to change the overlay's placement, handles, and appearance.");
    } else {
        println!("Already exists: {}", path.display());
        println!("Use --force to overwrite it.");
    }
    Ok(())
}
