//! `tint show` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::Result;

use crate::{commands::write_assignment, paths::Paths, shell};

/// Arguments for the show command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Only show this workspace.
    workspace: Option<String>,
}

/// Run the show command.
pub fn run(args: Args, paths: &Paths) -> Result<()> {
    let (_, colors) = paths.open()?;

    let assignments: Vec<_> = match &args.workspace {
        Some(workspace) => colors.assignment(workspace)?.into_iter().collect(),
        None => colors.assignments()?,
    };

    if assignments.is_empty() {
        match &args.workspace {
            Some(workspace) => shell::warn(format_args!("{workspace} has no color"))?,
            None => shell::warn("no workspace colors stored")?,
        }
    }

    for assignment in &assignments {
        shell::emit(assignment, |out| write_assignment(out, assignment))?;
    }
    Ok(())
}
