//! `tint generate` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::Result;
use serde::Serialize;
use tintspace_color::{Oklch, Rgb, generate_random_color_with};

use crate::{paths::Paths, shell};

/// Arguments for the generate command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Color the result must stay distinct from.
    #[arg(long, value_name = "HEX")]
    existing: Option<Rgb>,
}

#[derive(Debug, Serialize)]
struct Generated {
    color: Rgb,
    foreground: Rgb,
    oklch: Oklch,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f32>,
}

/// Run the generate command.
pub fn run(args: Args, paths: &Paths) -> Result<()> {
    let policy = paths.load_settings()?.policy();
    let color = generate_random_color_with(&mut rand::thread_rng(), args.existing, &policy);
    let oklch = color.to_oklch();

    let generated = Generated {
        color,
        foreground: color.contrasting_text_color(),
        oklch,
        distance: args.existing.map(|existing| oklch.distance(&existing.to_oklch())),
    };

    shell::emit(&generated, |out| {
        shell::field(out, "color", shell::swatch(generated.color))?;
        shell::field(out, "foreground", shell::swatch(generated.foreground))?;
        shell::field(
            out,
            "oklch",
            format_args!(
                "{:.3} {:.3} {:.1}",
                oklch.lightness, oklch.chroma, oklch.hue
            ),
        )?;
        if let Some(distance) = generated.distance {
            shell::field(out, "distance", format_args!("{distance:.3}"))?;
        }
        Ok(())
    })?;
    Ok(())
}
