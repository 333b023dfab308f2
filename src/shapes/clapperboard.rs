//! Studio clapperboard: a flat slab, a clapper stick hinged open on its left
//! edge, and a "play" triangle floating in front of the slab.
use super::{jitter, share, OBJECT_SCALE};
use rand::Rng;
use std::f32::consts::PI;

const STICK_ANGLE: f32 = PI / 6.0;
const PLAY_A: [f32; 2] = [-0.5, -0.5];
const PLAY_B: [f32; 2] = [0.5, 0.0];
const PLAY_C: [f32; 2] = [-0.5, 0.5];
pub const PLAY_Z: f32 = 0.15 * OBJECT_SCALE;

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let s = OBJECT_SCALE;
    let base_count = share(count, 0.6);
    let stick_count = share(count, 0.2);
    let play_count = count - base_count - stick_count;
    let mut p = Vec::with_capacity(count * 3);

    for _ in 0..base_count {
        p.push(jitter(rng, 4.0) * s);
        p.push(jitter(rng, 2.5) * s - 0.5 * s);
        p.push(jitter(rng, 0.2) * s);
    }

    let pivot_x = -2.0 * s;
    let (sin_a, cos_a) = STICK_ANGLE.sin_cos();
    for _ in 0..stick_count {
        let x = jitter(rng, 4.0);
        let y = jitter(rng, 0.4);
        let z = jitter(rng, 0.2);
        let dx = x * s - pivot_x;
        let dy = y * s;
        p.push(dx * cos_a - dy * sin_a + pivot_x);
        p.push(dx * sin_a + dy * cos_a + s);
        p.push(z * s);
    }

    for _ in 0..play_count {
        let [x, y] = sample_triangle(rng, PLAY_A, PLAY_B, PLAY_C);
        p.push(x * 1.5 * s);
        p.push(y * 1.5 * s - 0.5 * s);
        p.push(PLAY_Z);
    }
    p
}

/// Uniform point inside triangle `abc` (square-root barycentric sampling).
pub(crate) fn sample_triangle<R: Rng + ?Sized>(
    rng: &mut R,
    a: [f32; 2],
    b: [f32; 2],
    c: [f32; 2],
) -> [f32; 2] {
    let r1: f32 = rng.gen();
    let r2: f32 = rng.gen();
    let sqrt_r1 = r1.sqrt();
    let wa = 1.0 - sqrt_r1;
    let wb = sqrt_r1 * (1.0 - r2);
    let wc = sqrt_r1 * r2;
    [
        wa * a[0] + wb * b[0] + wc * c[0],
        wa * a[1] + wb * b[1] + wc * c[1],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn play_triangle_occupies_the_last_fifth() {
        let mut rng = StdRng::seed_from_u64(3);
        let count = 1_000;
        let p = generate(count, &mut rng);
        // 600 slab + 200 stick, the remaining 200 lie on the play plane
        for xyz in p[800 * 3..].chunks_exact(3) {
            assert!((xyz[2] - PLAY_Z).abs() < 1e-6);
        }
        for xyz in p[..600 * 3].chunks_exact(3) {
            assert!(xyz[2].abs() <= 0.1 * OBJECT_SCALE + 1e-6);
        }
    }

    #[test]
    fn triangle_samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let [x, y] = sample_triangle(&mut rng, PLAY_A, PLAY_B, PLAY_C);
            assert!(x >= -0.5 - 1e-6 && x <= 0.5 + 1e-6);
            // edges A-B and C-B bound |y| by (0.5 - x) / 2
            assert!(y.abs() <= (0.5 - x) / 2.0 + 1e-5);
        }
    }

    #[test]
    fn single_point_goes_to_the_play_triangle() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = generate(1, &mut rng);
        assert_eq!(p.len(), 3);
        assert!((p[2] - PLAY_Z).abs() < 1e-6);
    }
}
