//! Per-frame driver of the hero particle field.
//!
//! Owns the live position/colour buffers and moves them toward the active
//! shape every frame. The buffers are only ever written from `step`, which is
//! called once per frame from the UI thread.
use super::easing::{approach, approach_buffer, smoothing_factor, SmoothDamp};
use crate::shapes::palette;
use crate::shapes::{ShapeLibrary, ShapeVariant};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

const IDLE_SPIN_Y: f32 = 0.03;
const IDLE_SPIN_X: f32 = 0.015;
const REVEAL_SPIN_Y: f32 = 0.1;
const PARALLAX: f32 = 0.05;
const PARALLAX_SMOOTH_TIME: f32 = 2.0;
const SETTLE_SMOOTH_TIME: f32 = 0.25;
const BASE_OPACITY: f32 = 0.8;

/// Tunables for the morph. Defaults reproduce the site's feel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphSettings {
    /// Morph speed (per second) when the target is the idle cloud.
    pub idle_speed: f32,
    /// Morph speed when revealing one of the service shapes.
    pub reveal_speed: f32,
    /// Per-frame colour blend toward the base gradient.
    pub color_blend: f32,
    /// Per-point, per-frame chance of a highlight flash.
    pub flash_probability: f32,
}

impl Default for MorphSettings {
    fn default() -> Self {
        Self {
            idle_speed: 4.0,
            reveal_speed: 10.0,
            color_blend: 0.1,
            flash_probability: 0.0002,
        }
    }
}

impl MorphSettings {
    pub fn speed_for(&self, shape: ShapeVariant) -> f32 {
        if shape.is_idle() {
            self.idle_speed
        } else {
            self.reveal_speed
        }
    }
}

/// What the animator needs to know about the current frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the scene was mounted.
    pub elapsed: f32,
    /// Pointer in normalised device coordinates, `[-1, 1]`, y up.
    pub pointer: Vec2,
}

pub struct SceneAnimator {
    library: ShapeLibrary,
    positions: Vec<f32>,
    colors: Vec<f32>,
    base_colors: Vec<f32>,
    rotation: Vec3,
    tilt_x: SmoothDamp,
    tilt_z: SmoothDamp,
    opacity: f32,
    settings: MorphSettings,
    rng: StdRng,
}

impl SceneAnimator {
    pub fn new(count: usize, seed: u64, settings: MorphSettings) -> Self {
        let library = ShapeLibrary::build(count, seed);
        let positions = library.target(ShapeVariant::Idle).to_vec();
        let base_colors = palette::gradient_for(&positions);
        tracing::info!(count, "particle scene mounted");
        Self {
            colors: base_colors.clone(),
            base_colors,
            positions,
            library,
            rotation: Vec3::ZERO,
            tilt_x: SmoothDamp::default(),
            tilt_z: SmoothDamp::default(),
            opacity: BASE_OPACITY,
            settings,
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    pub fn count(&self) -> usize {
        self.library.count()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn base_colors(&self) -> &[f32] {
        &self.base_colors
    }

    pub fn target(&self, shape: ShapeVariant) -> &[f32] {
        self.library.target(shape)
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn settings_mut(&mut self) -> &mut MorphSettings {
        &mut self.settings
    }

    /// Object-to-world transform of the whole cloud (XYZ Euler order).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    pub fn step(&mut self, shape: ShapeVariant, input: &FrameInput) {
        self.rotate(shape, input);
        self.morph(shape, input.delta);
        self.recolor();
        self.flash();
        self.pulse(shape, input.elapsed);
    }

    fn rotate(&mut self, shape: ShapeVariant, input: &FrameInput) {
        let dt = input.delta;
        let rot = &mut self.rotation;
        if shape.is_idle() {
            rot.y += dt * IDLE_SPIN_Y;
            rot.x += dt * IDLE_SPIN_X;
            let target_x = rot.x - input.pointer.y * PARALLAX;
            let target_z = rot.z + input.pointer.x * PARALLAX;
            rot.x = self.tilt_x.step(rot.x, target_x, PARALLAX_SMOOTH_TIME, dt);
            rot.z = self.tilt_z.step(rot.z, target_z, PARALLAX_SMOOTH_TIME, dt);
        } else {
            rot.y += dt * REVEAL_SPIN_Y;
            rot.x = self.tilt_x.step(rot.x, 0.0, SETTLE_SMOOTH_TIME, dt);
            rot.z = self.tilt_z.step(rot.z, 0.0, SETTLE_SMOOTH_TIME, dt);
        }
        rot.x = wrap_angle(rot.x);
        rot.y = rot.y.rem_euclid(TAU);
        rot.z = wrap_angle(rot.z);
    }

    fn morph(&mut self, shape: ShapeVariant, delta: f32) {
        let factor = smoothing_factor(self.settings.speed_for(shape), delta);
        let target = self.library.target(shape);
        approach_buffer(&mut self.positions, target, factor);
    }

    fn recolor(&mut self) {
        approach_buffer(&mut self.colors, &self.base_colors, self.settings.color_blend);
    }

    fn flash(&mut self) {
        let count = self.count();
        if count == 0 || self.settings.flash_probability <= 0.0 {
            return;
        }
        let flashes = (count as f32 * self.settings.flash_probability).round() as usize;
        for _ in 0..flashes {
            let i = self.rng.gen_range(0..count) * 3;
            self.colors[i..i + 3].copy_from_slice(&palette::HIGHLIGHT);
        }
    }

    fn pulse(&mut self, shape: ShapeVariant, elapsed: f32) {
        let target = if shape.is_idle() {
            BASE_OPACITY + (elapsed * 2.5).sin() * 0.2
        } else {
            BASE_OPACITY
        };
        self.opacity = approach(self.opacity, target, 0.1);
    }
}

/// Wrap into `[-PI, PI)`.
fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
