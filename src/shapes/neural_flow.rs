//! Idle "neural flow" cloud: a golden-angle spiral over the sphere whose
//! radius is modulated by two interfering waves.
use std::f64::consts::PI;

pub const BASE_RADIUS: f64 = 3.5;

pub fn generate(count: usize) -> Vec<f32> {
    let mut p = Vec::with_capacity(count * 3);
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;

    for i in 0..count {
        let t = i as f64 / count as f64;
        let inclination = (1.0 - 2.0 * t).clamp(-1.0, 1.0).acos();
        let azimuth = 2.0 * PI * golden_ratio * i as f64;

        let wave1 = (azimuth * 3.0).sin() * (inclination * 4.0).cos();
        let wave2 = (azimuth * 10.0).cos() * (inclination * 10.0).sin() * 0.2;
        let r = BASE_RADIUS + wave1 * 0.8 + wave2;

        p.push((r * inclination.sin() * azimuth.cos()) as f32);
        p.push((r * inclination.sin() * azimuth.sin()) as f32);
        p.push((r * inclination.cos()) as f32);
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_stays_inside_the_wave_envelope() {
        let p = generate(2_000);
        for xyz in p.chunks_exact(3) {
            let r = (xyz[0] * xyz[0] + xyz[1] * xyz[1] + xyz[2] * xyz[2]).sqrt();
            assert!(r >= 3.5 - 1.0 - 1e-4 && r <= 3.5 + 1.0 + 1e-4, "r = {}", r);
        }
    }

    #[test]
    fn first_point_sits_on_the_pole() {
        let p = generate(100);
        // inclination = 0 for i = 0, so the point is on +z at r = 3.5 + wave terms (sin(0) = 0)
        assert!(p[0].abs() < 1e-6);
        assert!(p[1].abs() < 1e-6);
        assert!((p[2] - 3.5).abs() < 1e-4);
    }

    #[test]
    fn deterministic_without_rng() {
        assert_eq!(generate(321), generate(321));
    }
}
