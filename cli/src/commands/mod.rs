//! CLI command implementations.

pub mod assign;
pub mod clear;
pub mod generate;
pub mod inspect;
pub mod show;

use std::io::{self, Write};

use tintspace_core::Assignment;

use crate::shell;

/// Human rendering shared by `assign` and `show`.
pub fn write_assignment(out: &mut dyn Write, assignment: &Assignment) -> io::Result<()> {
    writeln!(out, "{}", assignment.workspace)?;
    shell::field(out, "background", shell::swatch(assignment.background))?;
    shell::field(out, "foreground", shell::swatch(assignment.foreground))
}
