pub mod clapperboard;
pub mod globe;
pub mod laptop_hologram;
pub mod lightbulb_brain;
pub mod neural_flow;
pub mod palette;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scale shared by the hand-built object shapes so they fit the same framing
/// as the idle cloud.
pub(crate) const OBJECT_SCALE: f32 = 0.7;

/// One named target configuration of the particle field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeVariant {
    /// Home cloud. Also the shape behind the contact dashboard.
    #[default]
    Idle,
    Studio,
    Strategy,
    Design,
    Global,
}

impl ShapeVariant {
    pub const ALL: [ShapeVariant; 5] = [
        ShapeVariant::Idle,
        ShapeVariant::Studio,
        ShapeVariant::Strategy,
        ShapeVariant::Design,
        ShapeVariant::Global,
    ];

    /// Service shapes selectable from the menu (everything except `Idle`).
    pub const SERVICES: [ShapeVariant; 4] = [
        ShapeVariant::Studio,
        ShapeVariant::Strategy,
        ShapeVariant::Design,
        ShapeVariant::Global,
    ];

    pub fn index(self) -> usize {
        match self {
            ShapeVariant::Idle => 0,
            ShapeVariant::Studio => 1,
            ShapeVariant::Strategy => 2,
            ShapeVariant::Design => 3,
            ShapeVariant::Global => 4,
        }
    }

    pub fn is_idle(self) -> bool {
        self == ShapeVariant::Idle
    }

    /// Canonical tag, used in config files and logs.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeVariant::Idle => "idle",
            ShapeVariant::Studio => "studio",
            ShapeVariant::Strategy => "strategy",
            ShapeVariant::Design => "design",
            ShapeVariant::Global => "global",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            ShapeVariant::Idle => "CONTACT",
            ShapeVariant::Studio => "STUDIO",
            ShapeVariant::Strategy => "STRATEGY",
            ShapeVariant::Design => "DESIGN",
            ShapeVariant::Global => "GLOBAL",
        }
    }

    /// Parse a canonical or legacy tag. The legacy geometric names (`cloud`,
    /// `ring`, `pyramid`, ...) are still accepted. Anything else resolves to
    /// `Idle` and is logged, so a misspelled tag shows up in the logs instead
    /// of silently rendering the home cloud.
    pub fn from_tag(tag: &str) -> ShapeVariant {
        match tag.trim().to_ascii_lowercase().as_str() {
            "idle" | "cloud" => ShapeVariant::Idle,
            "studio" | "ring" => ShapeVariant::Studio,
            "strategy" | "pyramid" | "cube" => ShapeVariant::Strategy,
            "design" | "icosahedron" | "helix" => ShapeVariant::Design,
            "global" | "sphere" => ShapeVariant::Global,
            other => {
                tracing::warn!(tag = other, "unknown shape tag, falling back to idle");
                ShapeVariant::Idle
            }
        }
    }

    /// Produce the flat `[x, y, z, x, y, z, ...]` buffer for this shape.
    pub fn generate<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Vec<f32> {
        match self {
            ShapeVariant::Idle => neural_flow::generate(count),
            ShapeVariant::Studio => clapperboard::generate(count, rng),
            ShapeVariant::Strategy => lightbulb_brain::generate(count, rng),
            ShapeVariant::Design => laptop_hologram::generate(count, rng),
            ShapeVariant::Global => globe::generate(count, rng),
        }
    }
}

/// Precomputed target buffers for every variant. Built once at scene mount.
pub struct ShapeLibrary {
    count: usize,
    targets: Vec<Vec<f32>>,
}

impl ShapeLibrary {
    pub fn build(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let targets = ShapeVariant::ALL
            .iter()
            .map(|shape| shape.generate(count, &mut rng))
            .collect();
        tracing::debug!(count, seed, "built shape library");
        Self { count, targets }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn target(&self, shape: ShapeVariant) -> &[f32] {
        &self.targets[shape.index()]
    }
}

/// Fractional share of `count`, rounded down. Generators give the remainder
/// to their last part.
pub(crate) fn share(count: usize, fraction: f64) -> usize {
    (count as f64 * fraction).floor() as usize
}

/// Uniform sample in `[-0.5, 0.5) * extent`.
pub(crate) fn jitter<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * extent
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTION_COUNT: usize = 15_000;

    #[test]
    fn every_shape_returns_three_floats_per_point() {
        let mut rng = StdRng::seed_from_u64(7);
        for shape in ShapeVariant::ALL {
            for count in [0, 1, 2, 5, PRODUCTION_COUNT] {
                let buf = shape.generate(count, &mut rng);
                assert_eq!(buf.len(), count * 3, "{:?} with count {}", shape, count);
            }
        }
    }

    #[test]
    fn every_coordinate_is_finite() {
        let mut rng = StdRng::seed_from_u64(11);
        for shape in ShapeVariant::ALL {
            for count in [1, 3, 10, 997, PRODUCTION_COUNT] {
                let buf = shape.generate(count, &mut rng);
                assert!(
                    buf.iter().all(|v| v.is_finite()),
                    "{:?} produced a non-finite value for count {}",
                    shape,
                    count
                );
            }
        }
    }

    #[test]
    fn library_is_reproducible_for_a_seed() {
        let a = ShapeLibrary::build(500, 42);
        let b = ShapeLibrary::build(500, 42);
        for shape in ShapeVariant::ALL {
            assert_eq!(a.target(shape), b.target(shape));
        }
        assert_eq!(a.count(), 500);
    }

    #[test]
    fn legacy_and_unknown_tags() {
        assert_eq!(ShapeVariant::from_tag("ring"), ShapeVariant::Studio);
        assert_eq!(ShapeVariant::from_tag(" Pyramid "), ShapeVariant::Strategy);
        assert_eq!(ShapeVariant::from_tag("icosahedron"), ShapeVariant::Design);
        assert_eq!(ShapeVariant::from_tag("sphere"), ShapeVariant::Global);
        assert_eq!(ShapeVariant::from_tag("cloud"), ShapeVariant::Idle);
        assert_eq!(ShapeVariant::from_tag("dodecahedron"), ShapeVariant::Idle);
        for shape in ShapeVariant::ALL {
            assert_eq!(ShapeVariant::from_tag(shape.tag()), shape);
        }
    }

    #[test]
    fn indices_are_dense() {
        for (i, shape) in ShapeVariant::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
        }
    }
}
