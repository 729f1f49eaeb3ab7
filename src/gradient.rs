// Radial opacity profiles for the gradient orbs.
//
// A profile maps normalized radial distance (0.0 at the center, 1.0 at the
// rim) to an opacity. Stops stay ordered by position; sampling is
// piecewise-linear and clamps outside the stop range. GPUI has no radial
// gradient fill, so profiles are rendered as stacks of concentric filled
// circles whose alphas come from `ring_alphas`.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialProfile {
    stops: Vec<GradientStop>,
}

// One circle of a ring-stack rendering: a filled circle at `radius`
// (normalized) painted with `alpha`, largest circle first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub radius: f32,
    pub alpha: f32,
}

impl RadialProfile {
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    // The orb ramp: full color at the center, 10% at 40% of the radius,
    // transparent at the rim.
    pub fn orb() -> Self {
        Self::new(vec![
            GradientStop {
                position: 0.0,
                opacity: 1.0,
            },
            GradientStop {
                position: 0.4,
                opacity: 0.1,
            },
            GradientStop {
                position: 1.0,
                opacity: 0.0,
            },
        ])
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn opacity_at(&self, position: f32) -> f32 {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return 0.0;
        };
        if position <= first.position {
            return first.opacity;
        }
        if position >= last.position {
            return last.opacity;
        }
        for pair in self.stops.windows(2) {
            let (before, after) = (pair[0], pair[1]);
            if position <= after.position {
                let span = after.position - before.position;
                if span <= f32::EPSILON {
                    return after.opacity;
                }
                let t = (position - before.position) / span;
                return before.opacity + (after.opacity - before.opacity) * t;
            }
        }
        last.opacity
    }

    // Gaussian blur of the profile along the radius, in the pixel domain:
    // `radius` is the orb radius in pixels and `sigma` the blur strength.
    // The radial function is even, so taps past the center sample the
    // mirrored distance. Sigma at or below zero is the identity.
    pub fn blurred(&self, sigma: f32, radius: f32) -> Self {
        if sigma <= 0.0 || radius <= 0.0 || self.stops.is_empty() {
            return self.clone();
        }

        const SAMPLES: usize = 64;
        const TAPS: i32 = 12;
        let step = sigma * 3.0 / TAPS as f32;

        let mut weights = Vec::with_capacity((TAPS * 2 + 1) as usize);
        let mut total = 0.0f32;
        for tap in -TAPS..=TAPS {
            let x = tap as f32 * step;
            let weight = (-(x * x) / (2.0 * sigma * sigma)).exp();
            weights.push(weight);
            total += weight;
        }

        let mut stops = Vec::with_capacity(SAMPLES);
        for sample in 0..SAMPLES {
            let position = sample as f32 / (SAMPLES - 1) as f32;
            let center = position * radius;
            let mut opacity = 0.0;
            for (tap, weight) in (-TAPS..=TAPS).zip(&weights) {
                let distance = (center + tap as f32 * step).abs();
                opacity += weight * self.opacity_at(distance / radius);
            }
            stops.push(GradientStop {
                position,
                opacity: (opacity / total).clamp(0.0, 1.0),
            });
        }
        Self { stops }
    }

    // Decomposes the profile into `rings` concentric filled circles,
    // largest first. Painting them in order alpha-composites back to the
    // profile: after circle k, coverage over its band is
    // 1 - Π(1 - alpha_j) for j <= k, which is solved against the profile
    // at each band midpoint.
    pub fn ring_alphas(&self, rings: usize) -> Vec<Ring> {
        if rings == 0 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(rings);
        let mut remaining = 1.0f32;
        for ring in 0..rings {
            let radius = (rings - ring) as f32 / rings as f32;
            let band_center = radius - 0.5 / rings as f32;
            let target = self.opacity_at(band_center).clamp(0.0, 1.0);
            let alpha = if remaining <= f32::EPSILON {
                0.0
            } else {
                (1.0 - (1.0 - target) / remaining).clamp(0.0, 1.0)
            };
            remaining *= 1.0 - alpha;
            out.push(Ring { radius, alpha });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orb_profile_fades_monotonically() {
        let profile = RadialProfile::orb();
        for pair in profile.stops().windows(2) {
            assert!(pair[0].opacity >= pair[1].opacity);
        }
        assert_eq!(profile.stops().last().map(|stop| stop.opacity), Some(0.0));
    }

    #[test]
    fn orb_profile_matches_its_stops() {
        let profile = RadialProfile::orb();
        assert!((profile.opacity_at(0.0) - 1.0).abs() < 1e-6);
        assert!((profile.opacity_at(0.4) - 0.1).abs() < 1e-6);
        assert!(profile.opacity_at(1.0).abs() < 1e-6);
    }

    #[test]
    fn sampling_interpolates_between_stops() {
        let profile = RadialProfile::orb();
        // halfway into each segment
        assert!((profile.opacity_at(0.2) - 0.55).abs() < 1e-6);
        assert!((profile.opacity_at(0.7) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn sampling_clamps_outside_the_stop_range() {
        let profile = RadialProfile::orb();
        assert!((profile.opacity_at(-1.0) - 1.0).abs() < 1e-6);
        assert!(profile.opacity_at(2.0).abs() < 1e-6);
    }

    #[test]
    fn construction_is_idempotent() {
        assert_eq!(RadialProfile::orb(), RadialProfile::orb());
    }

    #[test]
    fn unsorted_stops_are_ordered_on_construction() {
        let profile = RadialProfile::new(vec![
            GradientStop {
                position: 1.0,
                opacity: 0.0,
            },
            GradientStop {
                position: 0.0,
                opacity: 1.0,
            },
        ]);
        assert!((profile.opacity_at(0.0) - 1.0).abs() < 1e-6);
        assert!((profile.opacity_at(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn empty_profile_samples_transparent() {
        let profile = RadialProfile::new(Vec::new());
        assert!(profile.opacity_at(0.5).abs() < 1e-6);
    }

    #[test]
    fn blur_with_zero_sigma_is_identity() {
        let profile = RadialProfile::orb();
        assert_eq!(profile.blurred(0.0, 400.0), profile);
    }

    #[test]
    fn blur_preserves_the_monotonic_fade() {
        let blurred = RadialProfile::orb().blurred(15.0, 400.0);
        for pair in blurred.stops().windows(2) {
            assert!(pair[1].opacity <= pair[0].opacity + 1e-4);
        }
        for stop in blurred.stops() {
            assert!((0.0..=1.0).contains(&stop.opacity));
        }
    }

    #[test]
    fn blur_softens_the_center() {
        let profile = RadialProfile::orb();
        let blurred = profile.blurred(60.0, 400.0);
        assert!(blurred.opacity_at(0.0) < profile.opacity_at(0.0));
    }

    #[test]
    fn ring_alphas_stay_in_range() {
        for ring in RadialProfile::orb().ring_alphas(32) {
            assert!((0.0..=1.0).contains(&ring.alpha));
            assert!(ring.radius > 0.0 && ring.radius <= 1.0);
        }
    }

    #[test]
    fn rings_are_ordered_largest_first() {
        let rings = RadialProfile::orb().ring_alphas(16);
        assert_eq!(rings.len(), 16);
        for pair in rings.windows(2) {
            assert!(pair[0].radius > pair[1].radius);
        }
    }

    #[test]
    fn stacked_rings_reconstruct_the_profile() {
        let profile = RadialProfile::orb();
        let rings = profile.ring_alphas(32);
        let mut uncovered = 1.0f32;
        for ring in &rings {
            uncovered *= 1.0 - ring.alpha;
            let band_center = ring.radius - 0.5 / rings.len() as f32;
            let target = profile.opacity_at(band_center);
            assert!((1.0 - uncovered - target).abs() < 1e-3);
        }
    }
}
