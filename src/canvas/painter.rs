//! CPU fallback: project on the CPU and emit one mesh of tiny quads.
use super::{ParticleFrame, MIN_POINT_RADIUS_PX};
use eframe::egui;
use eframe::egui::epaint::{Mesh, Vertex, WHITE_UV};
use glam::Vec3;
use rayon::prelude::*;

/// One projected sprite in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub center: egui::Pos2,
    pub radius: f32,
    pub color: egui::Color32,
}

/// Project every point of `frame` into `rect`. Points behind the camera or
/// outside the depth range are dropped; sprite radius shrinks with depth.
pub fn project(frame: &ParticleFrame<'_>, rect: egui::Rect) -> Vec<Sprite> {
    let mvp = frame.view_proj * frame.model;
    let half_world = frame.point_size * 0.5;
    let scale_x = frame.clip_scale().x;
    let half_w = rect.width() * 0.5;
    let half_h = rect.height() * 0.5;
    let alpha = frame.opacity.clamp(0.0, 1.0);

    frame
        .positions
        .par_chunks_exact(3)
        .enumerate()
        .filter_map(|(i, p)| {
            let clip = mvp * Vec3::new(p[0], p[1], p[2]).extend(1.0);
            if clip.w <= 1e-4 {
                return None;
            }
            let ndc = clip.truncate() / clip.w;
            if !(0.0..=1.0).contains(&ndc.z) {
                return None;
            }
            let center = egui::pos2(
                rect.center().x + ndc.x * half_w,
                rect.center().y - ndc.y * half_h,
            );
            let radius = (half_world * scale_x / clip.w * half_w).max(MIN_POINT_RADIUS_PX);
            let [r, g, b] = frame.color(i);
            Some(Sprite {
                center,
                radius,
                color: additive(r * alpha, g * alpha, b * alpha),
            })
        })
        .collect()
}

/// Premultiplied colour with zero alpha: egui's blend adds it to what is
/// already there.
fn additive(r: f32, g: f32, b: f32) -> egui::Color32 {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_premultiplied(to_u8(r), to_u8(g), to_u8(b), 0)
}

pub fn build_mesh(frame: &ParticleFrame<'_>, rect: egui::Rect) -> egui::Shape {
    let sprites = project(frame, rect);
    let mut mesh = Mesh::default();
    mesh.vertices.reserve(sprites.len() * 4);
    mesh.indices.reserve(sprites.len() * 6);

    for sprite in sprites.iter().filter(|s| rect.expand(s.radius).contains(s.center)) {
        let base = mesh.vertices.len() as u32;
        let r = sprite.radius;
        for offset in [
            egui::vec2(-r, -r),
            egui::vec2(r, -r),
            egui::vec2(r, r),
            egui::vec2(-r, r),
        ] {
            mesh.vertices.push(Vertex {
                pos: sprite.center + offset,
                uv: WHITE_UV,
                color: sprite.color,
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    egui::Shape::mesh(mesh)
}
