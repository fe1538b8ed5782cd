use core::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    Chromaticity, HexColorError, Oklch, decode_channel, linear_srgb_to_oklch,
    parse::parse_hex_color,
};

/// Represents an 8-bit color in the gamma-encoded sRGB color space.
///
/// This is the interchange format at every boundary of tintspace: hex
/// strings, editor color customizations and lighting payloads all start or
/// end as an `Rgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Rgb {
    /// Black color.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White color.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new sRGB color from 8-bit red, green, and blue components.
    ///
    /// # Arguments
    /// * `red` - Red component (0-255)
    /// * `green` - Green component (0-255)
    /// * `blue` - Blue component (0-255)
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a new sRGB color from a packed 0xRRGGBB value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parses a hexadecimal color string.
    ///
    /// Accepts an optional leading `#` followed by 3, 6 or 8 hex digits. The
    /// 3-digit form duplicates each digit; the alpha byte of the 8-digit form
    /// is discarded. Use [`parse_hex_color`](crate::parse_hex_color) to keep it.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] if the body has the wrong length or contains
    /// a non-hexadecimal character.
    pub fn from_hex(hex: &str) -> Result<Self, HexColorError> {
        parse_hex_color(hex).map(|parsed| parsed.rgb)
    }

    /// Formats this color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Converts this color into the OKLCH color space.
    #[must_use]
    pub fn to_oklch(&self) -> Oklch {
        linear_srgb_to_oklch(
            decode_channel(self.red),
            decode_channel(self.green),
            decode_channel(self.blue),
        )
    }

    /// Perceived brightness in `[0, 1]` using the `0.299/0.587/0.114` weighting
    /// over gamma-encoded channels.
    #[must_use]
    pub fn perceived_brightness(&self) -> f32 {
        let weighted = 0.114_f32.mul_add(
            f32::from(self.blue),
            0.299_f32.mul_add(f32::from(self.red), 0.587 * f32::from(self.green)),
        );
        weighted / 255.0
    }

    /// Returns the text color that reads best on top of this background.
    ///
    /// White for backgrounds whose perceived brightness is below one half,
    /// black otherwise.
    #[must_use]
    pub fn contrasting_text_color(&self) -> Self {
        if self.perceived_brightness() < 0.5 {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }

    /// Projects this color onto CIE 1931 xy chromaticity.
    #[must_use]
    pub fn to_chromaticity(&self) -> Chromaticity {
        Chromaticity::from_rgb(*self)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.red, value.green, value.blue]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_string(), "#abcdef");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn parses_all_supported_widths() {
        assert_eq!(Rgb::from_hex("#f00"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("#0000ff"), Ok(Rgb::new(0, 0, 255)));
        assert_eq!(Rgb::from_hex("#ff0000ff"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("#FF000000"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!("1A2B3C".parse::<Rgb>(), Ok(Rgb::new(0x1A, 0x2B, 0x3C)));
    }

    #[test]
    fn try_hex_reports_errors() {
        assert!(matches!(
            Rgb::from_hex("#GGGGGG"),
            Err(HexColorError::InvalidDigit(1))
        ));
        assert!(matches!(
            Rgb::from_hex("#1234"),
            Err(HexColorError::InvalidLength(4))
        ));
        assert!(matches!(Rgb::from_hex(""), Err(HexColorError::InvalidLength(0))));
        assert!(Rgb::from_hex("red").is_err());
    }

    #[test]
    fn packed_values_unpack_in_rrggbb_order() {
        assert_eq!(Rgb::from_u32(0x1E90FF), Rgb::new(0x1E, 0x90, 0xFF));
        assert_eq!(<[u8; 3]>::from(Rgb::from((4, 5, 6))), [4, 5, 6]);
    }

    #[test]
    fn oklch_corners() {
        let black = Rgb::BLACK.to_oklch();
        assert!(black.lightness.abs() < 1e-4);
        assert!(black.chroma < 1e-4);

        let white = Rgb::WHITE.to_oklch();
        assert!((white.lightness - 1.0).abs() < 1e-3);
        assert!(white.chroma < 1e-3);

        let red = Rgb::new(255, 0, 0).to_oklch();
        assert!((red.lightness - 0.628).abs() < 0.01, "{red:?}");
        assert!((red.chroma - 0.258).abs() < 0.01, "{red:?}");
        assert!((red.hue - 29.2).abs() < 1.0, "{red:?}");
    }

    #[test]
    fn hue_is_never_negative() {
        // blue-violet sits at a negative atan2 angle before wrapping
        let lch = Rgb::new(120, 0, 255).to_oklch();
        assert!((0.0..360.0).contains(&lch.hue), "{lch:?}");
        assert!(lch.hue > 180.0);
    }

    #[test]
    fn contrast_scenarios() {
        assert_eq!(Rgb::new(0, 0, 0).contrasting_text_color(), Rgb::WHITE);
        assert_eq!(Rgb::new(50, 50, 50).contrasting_text_color(), Rgb::WHITE);
        assert_eq!(Rgb::new(128, 0, 0).contrasting_text_color(), Rgb::WHITE);
        assert_eq!(Rgb::new(255, 255, 255).contrasting_text_color(), Rgb::BLACK);
        assert_eq!(Rgb::new(255, 255, 200).contrasting_text_color(), Rgb::BLACK);
        assert_eq!(Rgb::new(200, 200, 200).contrasting_text_color(), Rgb::BLACK);

        assert_eq!(Rgb::new(0, 0, 0).contrasting_text_color().to_hex(), "#ffffff");
        assert_eq!(
            Rgb::new(255, 255, 255).contrasting_text_color().to_hex(),
            "#000000"
        );
    }

    #[test]
    fn perceived_brightness_spans_unit_range() {
        assert!(Rgb::BLACK.perceived_brightness().abs() < 1e-6);
        assert!((Rgb::WHITE.perceived_brightness() - 1.0).abs() < 1e-5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(18, 52, 86)).unwrap();
        assert_eq!(json, "\"#123456\"");
        let back: Rgb = serde_json::from_str("\"#abc\"").unwrap();
        assert_eq!(back, Rgb::new(0xAA, 0xBB, 0xCC));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
