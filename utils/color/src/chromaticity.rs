use crate::{Rgb, decode_channel};

/// CIE 1931 xy chromaticity, the color coordinate smart-light bridges expect.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity {
    /// x coordinate (0.0 to 1.0).
    pub x: f32,
    /// y coordinate (0.0 to 1.0).
    pub y: f32,
}

impl Chromaticity {
    /// The D65 white point, used when a color carries no light at all.
    pub const D65: Self = Self::new(0.3127, 0.3290);

    /// Creates a chromaticity pair.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Projects an sRGB color onto xy chromaticity.
    ///
    /// Channels are linearized, mapped to CIE XYZ with the sRGB (D65) matrix
    /// and normalized by `X + Y + Z`. Black has no chromaticity and maps to
    /// [`Chromaticity::D65`].
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let red = decode_channel(rgb.red);
        let green = decode_channel(rgb.green);
        let blue = decode_channel(rgb.blue);

        // https://www.w3.org/TR/css-color-4/#color-conversion-code
        let x = 0.412_390_8 * red + 0.357_584_34 * green + 0.180_480_8 * blue;
        let y = 0.212_639 * red + 0.715_168_7 * green + 0.072_192_32 * blue;
        let z = 0.019_330_82 * red + 0.119_194_78 * green + 0.950_532_15 * blue;

        let sum = x + y + z;
        if sum <= 0.0 {
            return Self::D65;
        }

        Self::new((x / sum).clamp(0.0, 1.0), (y / sum).clamp(0.0, 1.0))
    }

    /// Returns the pair as an `[x, y]` array, the shape lighting APIs use.
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<Rgb> for Chromaticity {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}
