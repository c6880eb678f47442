//! Descriptor generation for the decorative particle layers.
//!
//! Sections render the descriptors as ordinary nodes with looping CSS
//! animations, so the whole field is discarded with the section's subtree on
//! unmount. The random source is injected, which keeps generation cheap to
//! test; components pass `js_sys::Math::random`.

/// Hard cap on particles per field.
pub const MAX_PARTICLES: usize = 48;

#[derive(Clone, PartialEq, Debug)]
pub struct ParticleSpec {
    /// Position within the owning section, percent.
    pub left: f32,
    pub top: f32,
    /// Edge length, px.
    pub size: f32,
    /// Peak opacity of the loop.
    pub opacity: f32,
    /// Animation start offset, seconds.
    pub delay: f32,
    /// One loop of the drift animation, seconds.
    pub duration: f32,
    /// Drift endpoint relative to the start position, px.
    pub drift_x: f32,
    pub drift_y: f32,
    pub round: bool,
}

fn lerp(lo: f32, hi: f32, t: f64) -> f32 {
    lo + (hi - lo) * t as f32
}

/// Generates up to `count` particle descriptors (capped at
/// [`MAX_PARTICLES`]). `rng` must return values in `[0, 1)`.
pub fn generate(count: usize, mut rng: impl FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..count.min(MAX_PARTICLES))
        .map(|_| ParticleSpec {
            left: lerp(0.0, 100.0, rng()),
            top: lerp(0.0, 100.0, rng()),
            size: lerp(4.0, 10.0, rng()),
            opacity: lerp(0.3, 0.8, rng()),
            delay: lerp(0.0, 2.0, rng()),
            duration: lerp(10.0, 20.0, rng()),
            drift_x: lerp(-100.0, 100.0, rng()),
            drift_y: lerp(-100.0, 100.0, rng()),
            round: rng() < 0.7,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_bounded() {
        let specs = generate(500, || 0.5);
        assert_eq!(specs.len(), MAX_PARTICLES);
        assert_eq!(generate(12, || 0.5).len(), 12);
        assert!(generate(0, || 0.5).is_empty());
    }

    #[test]
    fn params_stay_in_range_at_the_extremes() {
        for spec in generate(4, || 0.0).into_iter().chain(generate(4, || 0.999999)) {
            assert!((0.0..=100.0).contains(&spec.left));
            assert!((0.0..=100.0).contains(&spec.top));
            assert!((4.0..=10.0).contains(&spec.size));
            assert!((0.3..=0.8).contains(&spec.opacity));
            assert!((0.0..=2.0).contains(&spec.delay));
            assert!((10.0..=20.0).contains(&spec.duration));
            assert!((-100.0..=100.0).contains(&spec.drift_x));
            assert!((-100.0..=100.0).contains(&spec.drift_y));
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_source() {
        let mut seq = (0..).map(|i| (i % 10) as f64 / 10.0);
        let mut seq2 = (0..).map(|i| (i % 10) as f64 / 10.0);
        let a = generate(8, move || seq.next().unwrap());
        let b = generate(8, move || seq2.next().unwrap());
        assert_eq!(a, b);
    }
}
