//! Colour ramp applied to the particle field.
//!
//! Colours are linear RGB in `[0, 1]`, stored as flat `[r, g, b, ...]` buffers
//! with the same point indexing as the position buffers.

/// Dark core colour (near the centre of the idle cloud).
pub const CORE: [f32; 3] = [0.1, 0.4, 0.03];
/// Bright outer colour (on the crests of the idle cloud).
pub const OUTER: [f32; 3] = [0.2, 0.8, 0.1];
/// Flash highlight.
pub const HIGHLIGHT: [f32; 3] = [0.85, 1.0, 0.6];

const RAMP_START: f32 = 2.5;
const RAMP_WIDTH: f32 = 2.0;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Colour for a point at radius `dist` from the origin.
pub fn ramp(dist: f32) -> [f32; 3] {
    let t = ((dist - RAMP_START) / RAMP_WIDTH).clamp(0.0, 1.0);
    [
        lerp(CORE[0], OUTER[0], t),
        lerp(CORE[1], OUTER[1], t),
        lerp(CORE[2], OUTER[2], t),
    ]
}

/// Base colour buffer derived from a reference (idle) position buffer.
pub fn gradient_for(reference: &[f32]) -> Vec<f32> {
    let mut colors = Vec::with_capacity(reference.len());
    for xyz in reference.chunks_exact(3) {
        let dist = (xyz[0] * xyz[0] + xyz[1] * xyz[1] + xyz[2] * xyz[2]).sqrt();
        colors.extend_from_slice(&ramp(dist));
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_clamps_at_both_ends() {
        assert_eq!(ramp(0.0), CORE);
        assert_eq!(ramp(10.0), OUTER);
        let mid = ramp(3.5);
        assert!((mid[1] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn gradient_matches_reference_length() {
        let reference = crate::shapes::neural_flow::generate(64);
        assert_eq!(gradient_for(&reference).len(), reference.len());
    }
}
