//! Global: Fibonacci-sphere globe with a faint latitude/longitude relief.
use rand::Rng;
use std::f64::consts::PI;

pub const RADIUS: f64 = 1.8;

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut p = Vec::with_capacity(count * 3);
    let golden = PI * (1.0 + 5.0_f64.sqrt());
    for i in 0..count {
        let k = i as f64 + 0.5;
        let phi = (1.0 - 2.0 * k / count as f64).clamp(-1.0, 1.0).acos();
        let theta = golden * k;
        let wave = (phi * 12.0).sin() * 0.1 + (theta * 8.0).cos() * 0.1;
        let r = RADIUS + wave * 0.5 + (rng.gen::<f64>() - 0.5) * 0.05;
        p.push((r * phi.sin() * theta.cos()) as f32);
        p.push((r * phi.sin() * theta.sin()) as f32);
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
    fn relief_stays_thin() {
        let mut rng = StdRng::seed_from_u64(8);
        let p = generate(3_000, &mut rng);
        for xyz in p.chunks_exact(3) {
            let r = (xyz[0] * xyz[0] + xyz[1] * xyz[1] + xyz[2] * xyz[2]).sqrt() as f64;
            // |wave| <= 0.2, halved, plus 0.025 jitter
            assert!((r - RADIUS).abs() <= 0.1 + 0.025 + 1e-4, "r = {}", r);
        }
    }
}
