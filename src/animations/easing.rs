//! Frame-rate aware smoothing helpers shared by the particle animator and the
//! camera rig.
use rayon::prelude::*;

/// Below this many floats the buffer helpers stay on the calling thread.
const PAR_MIN_LEN: usize = 4_096;

/// Blend factor for one frame of exponential smoothing: `speed * delta`,
/// clamped to `[0, 1]` so a long frame lands on the target instead of
/// overshooting it.
#[inline]
pub fn smoothing_factor(speed: f32, delta: f32) -> f32 {
    (speed * delta).clamp(0.0, 1.0)
}

/// One smoothing step: `current + (target - current) * factor`.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Apply [`approach`] element-wise, in place.
///
/// `current` and `target` must have the same length; extra elements in the
/// longer slice are ignored.
pub fn approach_buffer(current: &mut [f32], target: &[f32], factor: f32) {
    if factor >= 1.0 {
        for (c, t) in current.iter_mut().zip(target) {
            *c = *t;
        }
    } else if current.len() < PAR_MIN_LEN {
        for (c, t) in current.iter_mut().zip(target) {
            *c += (t - *c) * factor;
        }
    } else {
        current
            .par_iter_mut()
            .with_min_len(PAR_MIN_LEN)
            .zip(target.par_iter())
            .for_each(|(c, t)| *c += (t - *c) * factor);
    }
}

/// Euclidean distance between two flat buffers.
pub fn buffer_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Critically damped spring toward a target (the classic "smooth damp").
/// Keeps its own velocity between frames, so every animated property needs
/// its own instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothDamp {
    velocity: f32,
}

impl SmoothDamp {
    /// Values this close to the target snap onto it.
    pub const EPSILON: f32 = 0.001;

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advance `current` toward `target`, reaching it in roughly
    /// `smooth_time` seconds.
    pub fn step(&mut self, current: f32, target: f32, smooth_time: f32, delta: f32) -> f32 {
        if (current - target).abs() <= Self::EPSILON {
            self.velocity = 0.0;
            return target;
        }
        if delta <= 0.0 {
            return current;
        }
        let smooth_time = smooth_time.max(1e-4);
        let omega = 2.0 / smooth_time;
        let x = omega * delta;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let change = current - target;
        let temp = (self.velocity + omega * change) * delta;
        self.velocity = (self.velocity - omega * temp) * decay;
        let mut output = target + (change + temp) * decay;

        // never overshoot
        if (target - current > 0.0) == (output > target) {
            output = target;
            self.velocity = 0.0;
        }
        output
    }
}
