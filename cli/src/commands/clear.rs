//! `tint clear` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::Result;
use serde::Serialize;

use crate::{paths::Paths, shell};

/// Arguments for the clear command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Workspace identifier to forget.
    workspace: String,
}

#[derive(Debug, Serialize)]
struct Cleared<'a> {
    workspace: &'a str,
    removed: bool,
}

/// Run the clear command.
pub fn run(args: &Args, paths: &Paths) -> Result<()> {
    let (_, mut colors) = paths.open()?;
    let removed = colors.clear(&args.workspace)?;

    let cleared = Cleared {
        workspace: &args.workspace,
        removed,
    };
    shell::emit(&cleared, |_| {
        if removed {
            shell::status("Cleared", &args.workspace)
        } else {
            shell::warn(format_args!("{} had no color", args.workspace))
        }
    })?;
    Ok(())
}
