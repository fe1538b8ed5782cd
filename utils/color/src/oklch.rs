use crate::{Rgb, encode_channel, normalize_hue, oklch_to_linear_srgb};

/// Linear components this far outside `[0, 1]` still count as in gamut.
const GAMUT_EPSILON: f32 = 1e-4;

/// Represents a color in the perceptually-uniform OKLCH color space.
///
/// Lightness is expressed in the range 0.0 to 1.0, chroma controls the color
/// intensity, and hue is measured in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Perceptual lightness component (0.0 to 1.0).
    pub lightness: f32,
    /// Perceptual chroma component.
    pub chroma: f32,
    /// Hue angle in degrees.
    pub hue: f32,
}

impl Oklch {
    /// Creates a new OKLCH color from its lightness, chroma, and hue
    /// components.
    #[must_use]
    pub const fn new(lightness: f32, chroma: f32, hue: f32) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// Returns a copy with the hue wrapped into `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            hue: normalize_hue(self.hue),
            ..self
        }
    }

    /// Converts this OKLCH color into 8-bit sRGB.
    ///
    /// Colors outside the sRGB gamut are clamped per channel.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let [red, green, blue] = oklch_to_linear_srgb(self.lightness, self.chroma, self.hue);

        Rgb::new(
            encode_channel(red),
            encode_channel(green),
            encode_channel(blue),
        )
    }

    /// Whether this color maps into sRGB without clamping any channel.
    #[must_use]
    pub fn is_in_srgb_gamut(&self) -> bool {
        oklch_to_linear_srgb(self.lightness, self.chroma, self.hue)
            .iter()
            .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
    }

    /// Reduces chroma, keeping lightness and hue, until the color fits sRGB.
    ///
    /// Colors already in gamut are returned unchanged.
    #[must_use]
    pub fn clamp_chroma_to_srgb(self) -> Self {
        if self.is_in_srgb_gamut() {
            return self;
        }

        let mut low = 0.0_f32;
        let mut high = self.chroma.max(0.0);
        for _ in 0..24 {
            let mid = (low + high) * 0.5;
            let candidate = Self { chroma: mid, ..self };
            if candidate.is_in_srgb_gamut() {
                low = mid;
            } else {
                high = mid;
            }
        }

        Self { chroma: low, ..self }
    }

    /// Weighted perceptual distance between two colors.
    ///
    /// Lightness differences count double, chroma differences count once and
    /// the hue difference is taken along the shorter arc and scaled to
    /// `[0, 1]` by dividing by 180 degrees. Hue 0 and hue 360 are the same
    /// angle.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let lightness = 2.0 * (self.lightness - other.lightness);
        let chroma = self.chroma - other.chroma;

        let raw = (normalize_hue(self.hue) - normalize_hue(other.hue)).abs();
        let hue = raw.min(360.0 - raw) / 180.0;

        hue.mul_add(hue, lightness.mul_add(lightness, chroma * chroma))
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn distance_to_self_is_zero() {
        for color in [
            Oklch::new(0.0, 0.0, 0.0),
            Oklch::new(0.5, 0.1, 45.0),
            Oklch::new(0.7, 0.3, 359.9),
        ] {
            assert!(color.distance(&color).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Oklch::new(0.4, 0.2, 10.0);
        let b = Oklch::new(0.6, 0.05, 300.0);
        assert!((a.distance(&b) - b.distance(&a)).abs() < EPSILON);
    }

    #[test]
    fn hue_wraps_around() {
        let zero = Oklch::new(0.5, 0.1, 0.0);
        let full_turn = Oklch::new(0.5, 0.1, 360.0);
        let five = Oklch::new(0.5, 0.1, 5.0);
        let minus_five = Oklch::new(0.5, 0.1, 355.0);

        assert!(zero.distance(&full_turn) < 0.1);
        assert!(zero.distance(&full_turn) < EPSILON);
        assert!((zero.distance(&five) - zero.distance(&minus_five)).abs() < EPSILON);
        assert!((full_turn.distance(&five) - zero.distance(&five)).abs() < EPSILON);
    }

    #[test]
    fn distance_orders_colors_sensibly() {
        let red = Oklch::new(0.6, 0.2, 0.0);
        let blue = Oklch::new(0.6, 0.2, 240.0);
        let lighter_red = Oklch::new(0.62, 0.2, 0.0);

        assert!(red.distance(&blue) > 0.5);
        assert!(red.distance(&lighter_red) < 0.1);
    }

    #[test]
    fn distance_weights_components() {
        let base = Oklch::new(0.5, 0.1, 90.0);
        let lighter = Oklch::new(0.6, 0.1, 90.0);
        let more_chroma = Oklch::new(0.5, 0.2, 90.0);
        let opposite = Oklch::new(0.5, 0.1, 270.0);

        assert!((base.distance(&lighter) - 0.2).abs() < EPSILON);
        assert!((base.distance(&more_chroma) - 0.1).abs() < EPSILON);
        assert!((base.distance(&opposite) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn out_of_gamut_clamps_instead_of_failing() {
        let wild = Oklch::new(0.9, 0.8, 140.0);
        assert!(!wild.is_in_srgb_gamut());
        let rgb = wild.to_rgb();
        assert_eq!(rgb.green, 255);

        assert_eq!(Oklch::new(-1.0, 0.0, 0.0).to_rgb(), Rgb::BLACK);
        assert_eq!(Oklch::new(2.0, 0.0, 0.0).to_rgb(), Rgb::WHITE);
    }

    #[test]
    fn chroma_reduction_lands_in_gamut() {
        let wild = Oklch::new(0.45, 0.35, 150.0);
        let fitted = wild.clamp_chroma_to_srgb();

        assert!(fitted.is_in_srgb_gamut());
        assert!(fitted.chroma < wild.chroma);
        assert!(fitted.chroma > 0.05);
        assert!((fitted.lightness - wild.lightness).abs() < f32::EPSILON);
        assert!((fitted.hue - wild.hue).abs() < f32::EPSILON);

        let tame = Oklch::new(0.5, 0.05, 30.0);
        assert_eq!(tame.clamp_chroma_to_srgb(), tame);
    }

    #[test]
    fn normalizing_wraps_hue() {
        let color = Oklch::new(0.5, 0.1, -90.0).normalized();
        assert!((color.hue - 270.0).abs() < EPSILON);
    }

    #[test]
    fn rgb_roundtrip_on_primaries() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
        ] {
            let back = rgb.to_oklch().to_rgb();
            assert!(rgb.red.abs_diff(back.red) <= 2, "{rgb} -> {back}");
            assert!(rgb.green.abs_diff(back.green) <= 2, "{rgb} -> {back}");
            assert!(rgb.blue.abs_diff(back.blue) <= 2, "{rgb} -> {back}");
        }
    }
}
