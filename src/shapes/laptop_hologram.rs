//! Design "laptop hologram": keyboard deck and screen slabs with a widening
//! spiral rising out of the deck.
use super::{jitter, share, OBJECT_SCALE};
use rand::Rng;
use std::f32::consts::PI;

/// Turns of the hologram spiral (radians covered = 6π).
const SPIRAL_SWEEP: f32 = PI * 6.0;

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let s = OBJECT_SCALE;
    let laptop_count = share(count, 0.6);
    let holo_count = count - laptop_count;
    let mut p = Vec::with_capacity(count * 3);

    for i in 0..laptop_count {
        if i < laptop_count / 2 {
            // deck
            p.push(jitter(rng, 4.0) * s);
            p.push(jitter(rng, 0.2) * s - 1.5 * s);
            p.push(jitter(rng, 3.0) * s + s);
        } else {
            // screen
            p.push(jitter(rng, 4.0) * s);
            p.push(jitter(rng, 3.0) * s);
            p.push(jitter(rng, 0.2) * s - 0.5 * s);
        }
    }

    for i in 0..holo_count {
        let t = i as f32 / holo_count as f32;
        let angle = t * SPIRAL_SWEEP;
        let radius = t * 2.5 * s;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        let y = t * 3.0 * s - s;
        p.push(x + jitter(rng, 0.1) * s);
        p.push(y + jitter(rng, 0.1) * s);
        p.push(z + jitter(rng, 0.1) * s);
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spiral_widens_and_rises() {
        let mut rng = StdRng::seed_from_u64(21);
        let count = 2_000;
        let p = generate(count, &mut rng);
        let holo = &p[1_200 * 3..];
        let first = &holo[..3];
        let last = &holo[holo.len() - 3..];
        let r_first = (first[0] * first[0] + first[2] * first[2]).sqrt();
        let r_last = (last[0] * last[0] + last[2] * last[2]).sqrt();
        assert!(r_last > r_first + 1.0);
        assert!(last[1] > first[1] + 1.5);
    }

    #[test]
    fn deck_is_below_the_screen() {
        let mut rng = StdRng::seed_from_u64(21);
        let p = generate(1_000, &mut rng);
        // first 300 points form the deck, centred at y = -1.5 * scale
        for xyz in p[..300 * 3].chunks_exact(3) {
            assert!((xyz[1] + 1.5 * OBJECT_SCALE).abs() <= 0.1 * OBJECT_SCALE + 1e-6);
        }
    }
}
