//! `tint assign` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::Result;
use serde::Serialize;
use tintspace_color::Rgb;
use tintspace_core::{Assignment, ColorCustomizations, LightState};

use crate::{commands::write_assignment, paths::Paths, shell};

/// Arguments for the assign command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Workspace identifier, usually its folder path.
    workspace: String,

    /// Use this color instead of a random one (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    #[arg(long, value_name = "HEX")]
    color: Option<String>,

    /// Color the editor currently shows; a random color keeps away from it
    /// when the workspace has none stored.
    #[arg(long, value_name = "HEX", conflicts_with = "color")]
    theme: Option<Rgb>,
}

#[derive(Debug, Serialize)]
struct Applied<'a> {
    #[serde(flatten)]
    assignment: &'a Assignment,
    customizations: &'a ColorCustomizations,
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<LightState>,
}

/// Run the assign command.
pub fn run(args: Args, paths: &Paths) -> Result<()> {
    let (settings, mut colors) = paths.open()?;

    let assignment = match &args.color {
        Some(hex) => colors.assign_hex(&args.workspace, hex)?,
        None => colors.assign_random(&args.workspace, args.theme)?,
    };
    let customizations = ColorCustomizations::from_assignment(&assignment, &settings.appearance);
    let light = LightState::for_settings(assignment.background, &settings.lights);

    if customizations.is_empty() {
        shell::warn("no surfaces are enabled in [appearance]; nothing to apply")?;
    }
    shell::status("Assigned", &assignment.workspace)?;

    let applied = Applied {
        assignment: &assignment,
        customizations: &customizations,
        light,
    };
    shell::emit(&applied, |out| {
        write_assignment(out, &assignment)?;
        for (key, value) in customizations.iter() {
            shell::field(out, key, value)?;
        }
        if let Some(light) = light {
            shell::field(
                out,
                "light",
                format_args!("xy {:.4} {:.4} bri {}", light.xy[0], light.xy[1], light.bri),
            )?;
        }
        Ok(())
    })?;
    Ok(())
}
