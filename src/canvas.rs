//! Point-cloud rendering.
//
// Two back ends share one frame description: a wgpu paint callback that
// draws instanced quads, and a CPU path that projects the points itself and
// hands egui a single additive mesh.
#[cfg(feature = "wgpu")]
pub mod gpu;
pub mod painter;

use eframe::egui;
use glam::Mat4;

/// Smallest sprite radius drawn, in points.
pub const MIN_POINT_RADIUS_PX: f32 = 0.6;

/// Everything needed to draw one frame of a point cloud.
pub struct ParticleFrame<'a> {
    /// Flat `[x, y, z, ...]` object-space positions.
    pub positions: &'a [f32],
    /// Flat per-point RGB. When `None`, every point uses `tint`.
    pub colors: Option<&'a [f32]>,
    pub tint: [f32; 3],
    pub model: Mat4,
    pub view_proj: Mat4,
    pub opacity: f32,
    /// Sprite edge length in world units.
    pub point_size: f32,
}

impl ParticleFrame<'_> {
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn color(&self, i: usize) -> [f32; 3] {
        match self.colors {
            Some(c) if c.len() >= i * 3 + 3 => [c[i * 3], c[i * 3 + 1], c[i * 3 + 2]],
            _ => self.tint,
        }
    }

    /// How far one world unit, seen at unit depth, moves a point in clip
    /// space along x and y. The view rotation keeps rows unit length, so
    /// this is the projection's focal scale.
    pub fn clip_scale(&self) -> glam::Vec2 {
        let m = &self.view_proj;
        glam::Vec2::new(
            glam::Vec3::new(m.x_axis.x, m.y_axis.x, m.z_axis.x).length(),
            glam::Vec3::new(m.x_axis.y, m.y_axis.y, m.z_axis.y).length(),
        )
    }
}

/// Draw `frame` into `rect`, through the GPU callback when `use_gpu` is set
/// and the CPU mesh otherwise.
pub fn show(painter: &egui::Painter, rect: egui::Rect, frame: &ParticleFrame<'_>, use_gpu: bool) {
    if frame.count() == 0 || rect.width() < 1.0 || rect.height() < 1.0 {
        return;
    }

    #[cfg(feature = "wgpu")]
    if use_gpu {
        painter.add(egui_wgpu::Callback::new_paint_callback(
            rect,
            gpu::ParticleCallback::new(frame, rect),
        ));
        return;
    }
    #[cfg(not(feature = "wgpu"))]
    let _ = use_gpu;

    painter.add(self::painter::build_mesh(frame, rect));
}
