//! Strategy "lightbulb brain": a spiral-wound bulb shell over a cylindrical
//! base, with a wrinkled brain sphere nested in the bulb.
use super::{share, OBJECT_SCALE};
use rand::Rng;
use std::f64::consts::PI;

const BULB_RADIUS: f64 = 2.0;
const BASE_RADIUS: f32 = 0.8;
const BRAIN_RADIUS: f64 = 1.2;
const WRINKLE: f64 = 0.2;

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let s = OBJECT_SCALE as f64;
    let bulb_count = share(count, 0.4);
    let brain_count = count - bulb_count;
    // 80% of the bulb budget goes to the glass shell, the rest to the base
    let shell = bulb_count as f64 * 0.8;
    let mut p = Vec::with_capacity(count * 3);

    for i in 0..bulb_count {
        if (i as f64) < shell {
            let phi = (-1.0 + 2.0 * i as f64 / shell).clamp(-1.0, 1.0).acos();
            let theta = (shell * PI).sqrt() * phi;
            p.push((BULB_RADIUS * theta.cos() * phi.sin() * s) as f32);
            p.push((BULB_RADIUS * theta.sin() * phi.sin() * s + s) as f32);
            p.push((BULB_RADIUS * phi.cos() * s) as f32);
        } else {
            let angle = rng.gen::<f32>() * std::f32::consts::TAU;
            let r = BASE_RADIUS * OBJECT_SCALE;
            let h = rng.gen::<f32>() - 1.5;
            p.push(r * angle.cos());
            p.push(h * OBJECT_SCALE);
            p.push(r * angle.sin());
        }
    }

    let golden = PI * (1.0 + 5.0_f64.sqrt());
    for i in 0..brain_count {
        let k = i as f64 + 0.5;
        let phi = (1.0 - 2.0 * k / brain_count as f64).clamp(-1.0, 1.0).acos();
        let theta = golden * k;
        let wrinkle = (phi * 10.0).sin() * (theta * 5.0).cos() * WRINKLE
            + (phi * 7.0).cos() * (theta * 3.0).sin() * WRINKLE;
        let noise = (rng.gen::<f64>() - 0.5) * 0.1 * s;
        let r = BRAIN_RADIUS * s + wrinkle * 0.5 * s + noise;
        p.push((r * phi.sin() * theta.cos()) as f32);
        p.push((r * phi.sin() * theta.sin() + s) as f32);
        p.push((r * phi.cos()) as f32);
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn brain_is_nested_inside_the_bulb() {
        let mut rng = StdRng::seed_from_u64(5);
        let count = 1_000;
        let p = generate(count, &mut rng);
        let center_y = OBJECT_SCALE;
        let bulb_r = BULB_RADIUS as f32 * OBJECT_SCALE;
        // brain points start after the 400 bulb points
        for xyz in p[400 * 3..].chunks_exact(3) {
            let dy = xyz[1] - center_y;
            let r = (xyz[0] * xyz[0] + dy * dy + xyz[2] * xyz[2]).sqrt();
            assert!(r < bulb_r, "brain point escaped the bulb: r = {}", r);
        }
    }

    #[test]
    fn shell_points_lie_on_the_bulb() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = generate(1_000, &mut rng);
        let bulb_r = BULB_RADIUS as f32 * OBJECT_SCALE;
        for xyz in p[..320 * 3].chunks_exact(3) {
            let dy = xyz[1] - OBJECT_SCALE;
            let r = (xyz[0] * xyz[0] + dy * dy + xyz[2] * xyz[2]).sqrt();
            assert!((r - bulb_r).abs() < 1e-4);
        }
    }
}
