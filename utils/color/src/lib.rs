//! # Color Module
//!
//! The color engine behind tintspace. It converts 8-bit sRGB colors to and
//! from the perceptually uniform OKLCH space, measures perceptual distance,
//! draws accent colors that stay legible on a status bar while keeping away
//! from a color that is already in use, picks a readable text color for a
//! background and projects colors onto CIE 1931 chromaticity for smart lights.
//!
//! Everything here is pure and synchronous. [`Rgb`] is the interchange type at
//! the boundary (hex strings, lighting payloads, editor customizations) and
//! [`Oklch`] is the working space for generation and comparison.
//!
//! ```
//! use tintspace_color::{Rgb, generate_random_color};
//!
//! let existing = Rgb::from_hex("#1e90ff").unwrap();
//! let fresh = generate_random_color(Some(existing));
//!
//! let background = fresh.to_hex();
//! let foreground = fresh.contrasting_text_color().to_hex();
//! assert!(background.starts_with('#'));
//! assert!(foreground == "#ffffff" || foreground == "#000000");
//! ```

mod chromaticity;
pub use chromaticity::Chromaticity;
mod generate;
pub use generate::{
    GenerationPolicy, generate_random_color, generate_random_color_with, status_bar_color,
};
mod oklch;
pub use oklch::Oklch;
mod parse;
pub use parse::{HexColor, is_valid_hex_color, parse_hex_color};
mod rgb;
pub use rgb::Rgb;

use thiserror::Error;

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexColorError {
    /// The hex body is not 3, 6 or 8 digits long. Carries the body length.
    #[error("invalid color format: expected 3, 6 or 8 hexadecimal digits, found {0}")]
    InvalidLength(usize),
    /// A non-hexadecimal character was encountered at the provided byte index.
    #[error("invalid color format: invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

// https://www.w3.org/TR/css-color-4/#color-conversion-code
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055_f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Gamma-encodes a linear component and quantizes it to a clamped 8-bit channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_channel(linear: f32) -> u8 {
    (linear_to_srgb(linear) * 255.0).round().clamp(0.0, 255.0) as u8
}

fn decode_channel(channel: u8) -> f32 {
    srgb_to_linear(f32::from(channel) / 255.0)
}

#[allow(
    clippy::excessive_precision,
    clippy::many_single_char_names,
    clippy::suboptimal_flops
)]
fn linear_srgb_to_oklab(red: f32, green: f32, blue: f32) -> [f32; 3] {
    let l = 0.412_221_470_8_f32.mul_add(red, 0.536_332_536_3 * green) + 0.051_445_992_9 * blue;
    let m = 0.211_903_498_2_f32.mul_add(red, 0.680_699_545_1 * green) + 0.107_396_956_6 * blue;
    let s = 0.088_302_461_9_f32.mul_add(red, 0.281_718_837_6 * green) + 0.629_978_700_5 * blue;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.210_454_255_3_f32.mul_add(l_, 0.793_617_785 * m_) - 0.004_072_046_8 * s_,
        1.977_998_495_1_f32.mul_add(l_, (-2.428_592_205_f32).mul_add(m_, 0.450_593_709_9 * s_)),
        0.025_904_037_1_f32.mul_add(l_, 0.782_771_766_2 * m_) - 0.808_675_766 * s_,
    ]
}

fn linear_srgb_to_oklch(red: f32, green: f32, blue: f32) -> Oklch {
    let [lightness, a, b] = linear_srgb_to_oklab(red, green, blue);
    let chroma = a.hypot(b);
    let mut hue = b.atan2(a).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }
    // atan2 can land exactly on 360 after the shift for tiny negative angles
    if hue >= 360.0 {
        hue -= 360.0;
    }

    Oklch::new(lightness, chroma, hue)
}

#[allow(
    clippy::excessive_precision,
    clippy::many_single_char_names,
    clippy::suboptimal_flops
)]
fn oklch_to_linear_srgb(lightness: f32, chroma: f32, hue_degrees: f32) -> [f32; 3] {
    let hue_radians = hue_degrees.to_radians();
    let (sin_hue, cos_hue) = hue_radians.sin_cos();
    let a = chroma * cos_hue;
    let b = chroma * sin_hue;

    let l_ = lightness + 0.396_337_777_4_f32.mul_add(a, 0.215_803_757_3 * b);
    let m_ = lightness - 0.105_561_345_8_f32.mul_add(a, 0.063_854_172_8 * b);
    let s_ = lightness - 0.089_484_177_5_f32.mul_add(a, 1.291_485_548 * b);

    let l = l_.powi(3);
    let m = m_.powi(3);
    let s = s_.powi(3);

    [
        4.076_741_662_1_f32.mul_add(l, (-3.307_711_591_3_f32).mul_add(m, 0.230_969_929_2 * s)),
        (-1.268_438_004_6_f32).mul_add(l, 2.609_757_401_1_f32.mul_add(m, -0.341_319_396_5 * s)),
        (-0.004_196_086_3_f32).mul_add(l, (-0.703_418_614_7_f32).mul_add(m, 1.707_614_701 * s)),
    ]
}

fn normalize_hue(mut hue: f32) -> f32 {
    hue %= 360.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    if hue >= 360.0 {
        hue = 0.0;
    }
    hue
}
