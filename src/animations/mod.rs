pub mod animator;
pub mod easing;
pub mod nebula;

// Re-exports for convenience
pub use animator::{FrameInput, MorphSettings, SceneAnimator};
pub use nebula::NebulaField;
