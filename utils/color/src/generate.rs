//! Random accent colors for the status bar.
//!
//! Candidates come from a band of OKLCH space that reads well as a small
//! accent: mid lightness, clearly visible chroma, any hue. When a color is
//! already in use, the search keeps the candidate farthest from it.

use rand::Rng;
use tracing::{debug, trace};

use crate::{Oklch, Rgb};

const LIGHTNESS_RANGE: (f32, f32) = (0.3, 0.7);
const CHROMA_RANGE: (f32, f32) = (0.12, 0.35);
/// Lightness/chroma draws per hue before falling back to [`most_chromatic_in_band`].
const GAMUT_DRAWS: usize = 32;
const FALLBACK_STEPS: u16 = 16;

/// Tuning for [`generate_random_color_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationPolicy {
    /// Stop searching once a candidate is strictly farther than this from the
    /// existing color.
    pub distance_threshold: f32,
    /// Upper bound on candidates drawn when an existing color is supplied.
    pub max_attempts: u32,
}

impl GenerationPolicy {
    /// Distance that ends the search early.
    pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 0.5;
    /// Candidate budget.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

    /// Creates a policy from explicit values.
    #[must_use]
    pub const fn new(distance_threshold: f32, max_attempts: u32) -> Self {
        Self {
            distance_threshold,
            max_attempts,
        }
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_DISTANCE_THRESHOLD,
            Self::DEFAULT_MAX_ATTEMPTS,
        )
    }
}

/// Draws one status-bar candidate.
///
/// Hue is uniform in `[0, 360)` and is never redrawn. Lightness and chroma
/// are uniform in `[0.3, 0.7]` and `[0.12, 0.35]`, redrawn for the same hue
/// until the color fits sRGB. Some hues (around cyan) barely reach chroma
/// 0.12 anywhere in the lightness band; if none of a bounded number of draws
/// fits, the lightness with the most in-gamut chroma is used instead.
pub fn status_bar_color<R: Rng + ?Sized>(rng: &mut R) -> Oklch {
    let hue = rng.gen_range(0.0..360.0);
    for _ in 0..GAMUT_DRAWS {
        let candidate = draw(rng, hue);
        if candidate.is_in_srgb_gamut() {
            return candidate;
        }
    }

    let fallback = most_chromatic_in_band(hue);
    trace!(?fallback, "no in-gamut draw, using widest lightness for hue");
    fallback
}

/// The in-gamut color of `hue` closest to the band's chroma floor, across a
/// grid of band lightnesses.
fn most_chromatic_in_band(hue: f32) -> Oklch {
    let (low, high) = LIGHTNESS_RANGE;
    (0..=FALLBACK_STEPS)
        .map(|step| {
            let t = f32::from(step) / f32::from(FALLBACK_STEPS);
            Oklch::new((high - low).mul_add(t, low), CHROMA_RANGE.0, hue).clamp_chroma_to_srgb()
        })
        .fold(Oklch::new(high, 0.0, hue), |best, candidate| {
            if candidate.chroma > best.chroma {
                candidate
            } else {
                best
            }
        })
}

fn draw<R: Rng + ?Sized>(rng: &mut R, hue: f32) -> Oklch {
    Oklch::new(
        rng.gen_range(LIGHTNESS_RANGE.0..=LIGHTNESS_RANGE.1),
        rng.gen_range(CHROMA_RANGE.0..=CHROMA_RANGE.1),
        hue,
    )
}

/// Generates a status-bar color, keeping away from `existing` when given.
///
/// Uses the thread-local RNG and [`GenerationPolicy::default`].
#[must_use]
pub fn generate_random_color(existing: Option<Rgb>) -> Rgb {
    generate_random_color_with(&mut rand::thread_rng(), existing, &GenerationPolicy::default())
}

/// Generates a status-bar color with an explicit RNG and policy.
///
/// Without an existing color the first candidate is returned. Otherwise up to
/// `policy.max_attempts` candidates are drawn (at least one) and the one
/// farthest from `existing` wins; the search stops at the first candidate
/// whose distance exceeds `policy.distance_threshold`. This is best effort:
/// when the budget runs out the farthest candidate is returned even if it is
/// below the threshold.
pub fn generate_random_color_with<R: Rng + ?Sized>(
    rng: &mut R,
    existing: Option<Rgb>,
    policy: &GenerationPolicy,
) -> Rgb {
    let Some(existing) = existing else {
        let color = status_bar_color(rng).to_rgb();
        debug!(%color, "generated color");
        return color;
    };

    let target = existing.to_oklch();
    let mut best = status_bar_color(rng);
    let mut best_distance = best.distance(&target);
    let mut attempts = 1;

    while best_distance <= policy.distance_threshold && attempts < policy.max_attempts {
        let candidate = status_bar_color(rng);
        let distance = candidate.distance(&target);
        trace!(attempt = attempts, distance, "scored candidate");
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
        attempts += 1;
    }

    let color = best.to_rgb();
    debug!(
        %existing,
        %color,
        distance = best_distance,
        attempts,
        "generated distinct color"
    );
    color
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn default_policy_is_pinned() {
        let policy = GenerationPolicy::default();
        assert!((policy.distance_threshold - 0.5).abs() < f32::EPSILON);
        assert_eq!(policy.max_attempts, 50);
    }

    #[test]
    fn candidates_stay_inside_the_status_bar_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let color = status_bar_color(&mut rng);
            assert!((0.3..=0.7).contains(&color.lightness), "{color:?}");
            assert!((0.115..=0.35).contains(&color.chroma), "{color:?}");
            assert!((0.0..360.0).contains(&color.hue), "{color:?}");
            assert!(color.is_in_srgb_gamut(), "{color:?}");
        }
    }

    #[test]
    fn candidate_hues_are_uniform() {
        const DRAWS: usize = 12_000;
        let mut rng = StdRng::seed_from_u64(1);
        let mut bins = [0_usize; 12];
        for _ in 0..DRAWS {
            let hue = status_bar_color(&mut rng).hue;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bin = ((hue / 30.0) as usize).min(11);
            bins[bin] += 1;
        }

        let expected = DRAWS / bins.len();
        for (i, &count) in bins.iter().enumerate() {
            assert!(
                count.abs_diff(expected) <= expected * 15 / 100,
                "bin {i} ({}..{} deg) has {count}, expected about {expected}: {bins:?}",
                i * 30,
                i * 30 + 30
            );
        }
    }

    #[test]
    fn cyan_falls_back_near_the_chroma_floor() {
        // no lightness in the band fits chroma 0.12 at this hue
        let color = most_chromatic_in_band(200.0);
        assert!(color.is_in_srgb_gamut(), "{color:?}");
        assert!((color.hue - 200.0).abs() < f32::EPSILON);
        assert!(color.chroma > 0.115 && color.chroma <= 0.12, "{color:?}");
        assert!((0.3..=0.7).contains(&color.lightness), "{color:?}");

        let roomy = most_chromatic_in_band(30.0);
        assert!((roomy.chroma - 0.12).abs() < 1e-6, "{roomy:?}");
    }

    #[test]
    fn generated_chroma_stays_above_the_floor() {
        let mut rng = StdRng::seed_from_u64(5);
        let policy = GenerationPolicy::default();
        for _ in 0..5_000 {
            let lch = generate_random_color_with(&mut rng, None, &policy).to_oklch();
            assert!(lch.chroma >= 0.11, "{lch:?}");
        }
    }

    #[test]
    fn same_seed_same_color() {
        let existing = Some(Rgb::new(30, 144, 255));
        let policy = GenerationPolicy::default();
        let a = generate_random_color_with(&mut StdRng::seed_from_u64(42), existing, &policy);
        let b = generate_random_color_with(&mut StdRng::seed_from_u64(42), existing, &policy);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_threshold_stops_after_first_candidate() {
        // any distance above zero ends the search on the first draw
        let policy = GenerationPolicy::new(0.0, 50);
        let existing = Some(Rgb::new(200, 30, 30));

        let mut searched = StdRng::seed_from_u64(9);
        let mut single = StdRng::seed_from_u64(9);
        let result = generate_random_color_with(&mut searched, existing, &policy);
        let first = status_bar_color(&mut single).to_rgb();
        assert_eq!(result, first);
    }

    #[test]
    fn zero_attempts_still_yields_a_color() {
        let policy = GenerationPolicy::new(0.5, 0);
        let mut rng = StdRng::seed_from_u64(3);
        let color = generate_random_color_with(&mut rng, Some(Rgb::BLACK), &policy);
        let lch = color.to_oklch();
        assert!(lch.lightness > 0.25 && lch.lightness < 0.75, "{lch:?}");
    }

    #[test]
    fn unreachable_threshold_returns_best_of_budget() {
        let policy = GenerationPolicy::new(f32::INFINITY, 50);
        let existing = Rgb::new(0, 128, 128);
        let target = existing.to_oklch();

        let mut rng = StdRng::seed_from_u64(11);
        let result = generate_random_color_with(&mut rng, Some(existing), &policy);

        let mut replay = StdRng::seed_from_u64(11);
        let best = (0..50)
            .map(|_| status_bar_color(&mut replay))
            .map(|c| c.distance(&target))
            .fold(0.0_f32, f32::max);

        let achieved = result.to_oklch().distance(&target);
        assert!((achieved - best).abs() < 0.02, "{achieved} vs {best}");
    }

    #[test]
    fn generated_colors_keep_their_distance() {
        let mut rng = StdRng::seed_from_u64(1234);
        let policy = GenerationPolicy::default();
        let mut close_calls = 0;

        for _ in 0..200 {
            let existing = Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen());
            let color = generate_random_color_with(&mut rng, Some(existing), &policy);
            if color.to_oklch().distance(&existing.to_oklch()) <= 0.1 {
                close_calls += 1;
            }
        }

        assert!(close_calls <= 2, "{close_calls} of 200 were too close");
    }

    #[test]
    fn thread_rng_entry_point_without_existing_color() {
        let lch = generate_random_color(None).to_oklch();
        assert!((0.29..=0.71).contains(&lch.lightness), "{lch:?}");
        assert!((0.11..=0.36).contains(&lch.chroma), "{lch:?}");
    }
}
