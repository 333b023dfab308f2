//! Pointer-reactive background field of the legal landing page.
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_COUNT: usize = 3_000;
const SPREAD_XY: f32 = 25.0;
const SPREAD_Z: f32 = 10.0;
const REPEL_RADIUS: f32 = 4.0;
const REPEL_STRENGTH: f32 = 0.2;
const SPRING: f32 = 0.05;
const DRIFT: f32 = 0.002;

pub struct NebulaField {
    positions: Vec<f32>,
    origins: Vec<f32>,
}

impl NebulaField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut origins = Vec::with_capacity(count * 3);
        for _ in 0..count {
            origins.push((rng.gen::<f32>() - 0.5) * SPREAD_XY);
            origins.push((rng.gen::<f32>() - 0.5) * SPREAD_XY);
            origins.push((rng.gen::<f32>() - 0.5) * SPREAD_Z);
        }
        Self {
            positions: origins.clone(),
            origins,
        }
    }

    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Advance one frame. `pointer` is in world units on the z = 0 plane.
    /// Points near the pointer are pushed away, the rest spring back to
    /// where they started; everything drifts a little.
    pub fn step(&mut self, pointer: Vec2, time: f32) {
        for (p, o) in self
            .positions
            .chunks_exact_mut(3)
            .zip(self.origins.chunks_exact(3))
        {
            let (mut x, mut y) = (p[0], p[1]);
            let dx = pointer.x - x;
            let dy = pointer.y - y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < REPEL_RADIUS {
                let force = (REPEL_RADIUS - dist) / REPEL_RADIUS;
                let angle = dy.atan2(dx);
                x -= angle.cos() * force * REPEL_STRENGTH;
                y -= angle.sin() * force * REPEL_STRENGTH;
            } else {
                x += (o[0] - x) * SPRING;
                y += (o[1] - y) * SPRING;
            }

            x += (time * 0.2 + y * 0.5).sin() * DRIFT;
            y += (time * 0.2 + x * 0.5).cos() * DRIFT;

            p[0] = x;
            p[1] = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_away() -> Vec2 {
        Vec2::new(1_000.0, 1_000.0)
    }

    #[test]
    fn fills_the_box() {
        let field = NebulaField::new(DEFAULT_COUNT, 1);
        assert_eq!(field.count(), DEFAULT_COUNT);
        for p in field.positions().chunks_exact(3) {
            assert!(p[0].abs() <= SPREAD_XY / 2.0);
            assert!(p[1].abs() <= SPREAD_XY / 2.0);
            assert!(p[2].abs() <= SPREAD_Z / 2.0);
        }
    }

    #[test]
    fn pointer_pushes_nearby_points_away() {
        let mut field = NebulaField::new(500, 2);
        let target = Vec2::new(field.positions()[0] + 1.0, field.positions()[1]);
        let before = (Vec2::new(field.positions()[0], field.positions()[1]) - target).length();
        for _ in 0..5 {
            field.step(target, 0.0);
        }
        let after = (Vec2::new(field.positions()[0], field.positions()[1]) - target).length();
        assert!(after > before + 0.3, "before {} after {}", before, after);
    }

    #[test]
    fn points_spring_back_once_the_pointer_leaves() {
        let mut field = NebulaField::new(200, 3);
        let origin = Vec2::new(field.positions()[0], field.positions()[1]);
        for _ in 0..10 {
            field.step(origin + Vec2::new(0.5, 0.0), 0.0);
        }
        let displaced = (Vec2::new(field.positions()[0], field.positions()[1]) - origin).length();
        assert!(displaced > 0.5);

        for _ in 0..300 {
            field.step(far_away(), 0.0);
        }
        let settled = (Vec2::new(field.positions()[0], field.positions()[1]) - origin).length();
        // only the drift term remains, which is bounded by DRIFT / SPRING per axis
        assert!(settled < 0.1, "settled {} away", settled);
    }

    #[test]
    fn depth_never_changes() {
        let mut field = NebulaField::new(100, 4);
        let depths: Vec<f32> = field.positions().chunks_exact(3).map(|p| p[2]).collect();
        for i in 0..50 {
            field.step(Vec2::ZERO, i as f32 * 0.016);
        }
        let after: Vec<f32> = field.positions().chunks_exact(3).map(|p| p[2]).collect();
        assert_eq!(depths, after);
    }
}
