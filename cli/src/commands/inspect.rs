//! `tint inspect` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tintspace_color::{Chromaticity, Oklch, Rgb, is_valid_hex_color, parse_hex_color};

use crate::shell;

/// Arguments for the inspect command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Color as `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional here).
    color: String,
}

#[derive(Debug, Serialize)]
struct Inspection {
    color: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    alpha: Option<u8>,
    /// Whether the input would be accepted as a workspace color.
    accepted: bool,
    oklch: Oklch,
    xy: Chromaticity,
    brightness: f32,
    foreground: Rgb,
}

/// Run the inspect command.
pub fn run(args: &Args) -> Result<()> {
    let input = args.color.trim();
    let parsed = parse_hex_color(input).wrap_err_with(|| format!("cannot inspect {input:?}"))?;
    let color = parsed.rgb;

    let inspection = Inspection {
        color,
        alpha: parsed.alpha,
        accepted: is_valid_hex_color(input),
        oklch: color.to_oklch(),
        xy: color.to_chromaticity(),
        brightness: color.perceived_brightness(),
        foreground: color.contrasting_text_color(),
    };

    if !inspection.accepted {
        shell::warn(format_args!(
            "{input:?} parses, but workspace colors must be written as #rgb, #rrggbb or #rrggbbaa"
        ))?;
    }

    shell::emit(&inspection, |out| {
        let Inspection { oklch, xy, .. } = &inspection;
        shell::field(out, "color", shell::swatch(color))?;
        if let Some(alpha) = inspection.alpha {
            shell::field(out, "alpha", alpha)?;
        }
        shell::field(
            out,
            "oklch",
            format_args!(
                "{:.3} {:.3} {:.1}",
                oklch.lightness, oklch.chroma, oklch.hue
            ),
        )?;
        shell::field(out, "xy", format_args!("{:.4} {:.4}", xy.x, xy.y))?;
        shell::field(
            out,
            "brightness",
            format_args!("{:.3}", inspection.brightness),
        )?;
        shell::field(out, "foreground", shell::swatch(inspection.foreground))
    })?;
    Ok(())
}
