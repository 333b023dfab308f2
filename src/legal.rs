//! Legal-services landing: nebula background, header, typewriter hero and
//! the use-case cards.
use crate::animations::nebula::{NebulaField, DEFAULT_COUNT};
use crate::camera::viewport_world_size;
use crate::canvas::{self, ParticleFrame};
use eframe::egui;
use glam::{Mat4, Vec2, Vec3};

pub const HERO_LINE: &str = "> INITIALIZING CORPORATE PROTOCOL...";
const CHAR_SECS: f64 = 0.05;
const CAMERA_Z: f32 = 10.0;
const FOV_DEGREES: f32 = 60.0;
const POINT_SIZE: f32 = 0.04;
const OPACITY: f32 = 0.6;
pub const CYAN: egui::Color32 = egui::Color32::from_rgb(0x00, 0xf2, 0xff);
const NAV: [&str; 3] = ["PROTOCOL", "STATUS", "ACCESS"];

const USE_CASES: [(&str, &str); 3] = [
    (
        "QFC Company Formation",
        "Automated entity structuring and compliance checks for Qatar Financial Centre regulations.",
    ),
    (
        "Smart Contract Logic",
        "Self-executing agreements with cryptographic verification and immutable audit trails.",
    ),
    (
        "Dispute Resolution Dashboard",
        "AI-driven mediation dashboard for rapid conflict settlement and case management.",
    ),
];

/// Prefix of [`HERO_LINE`] typed after `elapsed` seconds, one character
/// every 50 ms.
pub fn typed_prefix(elapsed: f64) -> &'static str {
    let typed = if elapsed <= 0.0 {
        0
    } else {
        ((elapsed / CHAR_SECS).floor() as usize + 1).min(HERO_LINE.chars().count())
    };
    let end = HERO_LINE
        .char_indices()
        .nth(typed)
        .map(|(i, _)| i)
        .unwrap_or(HERO_LINE.len());
    &HERO_LINE[..end]
}

/// Map a pointer in NDC onto the z = 0 plane of the legal camera.
pub fn pointer_to_world(pointer_ndc: Vec2, aspect: f32) -> Vec2 {
    let (w, h) = viewport_world_size(CAMERA_Z, FOV_DEGREES.to_radians(), aspect);
    Vec2::new(pointer_ndc.x * w / 2.0, pointer_ndc.y * h / 2.0)
}

pub struct LegalPage {
    nebula: NebulaField,
    mounted_at: Option<f64>,
}

impl LegalPage {
    pub fn new(seed: u64) -> Self {
        Self {
            nebula: NebulaField::new(DEFAULT_COUNT, seed),
            mounted_at: None,
        }
    }

    pub fn nebula(&self) -> &NebulaField {
        &self.nebula
    }

    pub fn show(&mut self, ctx: &egui::Context, now: f64, pointer_ndc: Vec2, use_gpu: bool) {
        let mounted_at = *self.mounted_at.get_or_insert(now);
        let elapsed = now - mounted_at;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(3, 3, 6)))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let aspect = rect.width() / rect.height().max(1.0);
                self.nebula
                    .step(pointer_to_world(pointer_ndc, aspect), elapsed as f32);

                let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
                let proj = Mat4::perspective_rh(FOV_DEGREES.to_radians(), aspect, 0.1, 100.0);
                let frame = ParticleFrame {
                    positions: self.nebula.positions(),
                    colors: None,
                    tint: [0.0, 0xf2 as f32 / 255.0, 1.0],
                    model: Mat4::IDENTITY,
                    view_proj: proj * view,
                    opacity: OPACITY,
                    point_size: POINT_SIZE,
                };
                canvas::show(ui.painter(), rect, &frame, use_gpu);

                header(ui);
                hero(ui, elapsed);
                use_cases(ui);
            });
    }
}

fn header(ui: &mut egui::Ui) {
    ui.add_space(24.0);
    ui.horizontal(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("[").monospace().color(CYAN));
        ui.label(egui::RichText::new("LEGAL_SYSTEM_QA").monospace().color(egui::Color32::WHITE));
        ui.label(egui::RichText::new("]").monospace().color(CYAN));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(24.0);
            for item in NAV.iter().rev() {
                let button = egui::Button::new(egui::RichText::new(*item).monospace().size(11.0))
                    .frame(false);
                if ui.add(button).clicked() {
                    tracing::debug!(item, "legal nav clicked");
                }
            }
        });
    });
}

fn hero(ui: &mut egui::Ui, elapsed: f64) {
    ui.add_space(ui.available_height() * 0.2);
    ui.vertical_centered(|ui| {
        let typed = typed_prefix(elapsed);
        let (head, tail) = typed.split_at(typed.len().min(1));
        let cursor_on = (elapsed / 0.4) as u64 % 2 == 0;
        ui.horizontal(|ui| {
            // centre the line by hand; horizontal layouts don't
            let full = HERO_LINE.chars().count() as f32 * 17.0;
            ui.add_space(((ui.available_width() - full) / 2.0).max(0.0));
            ui.label(egui::RichText::new(head).monospace().size(28.0).color(CYAN));
            ui.label(egui::RichText::new(tail).monospace().size(28.0).color(egui::Color32::WHITE));
            if cursor_on {
                ui.label(egui::RichText::new("█").monospace().size(24.0).color(CYAN));
            }
        });

        if elapsed > 2.5 {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Autonomous Legal Intelligence for Qatar.")
                    .size(18.0)
                    .color(egui::Color32::LIGHT_GRAY),
            );
            ui.label(
                egui::RichText::new("Optimizing governance through algorithmic precision.")
                    .size(14.0)
                    .weak(),
            );
        }
    });
}

fn use_cases(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.columns(USE_CASES.len(), |cols| {
        for (i, (col, (title, desc))) in cols.iter_mut().zip(USE_CASES.iter()).enumerate() {
            egui::Frame::none()
                .fill(egui::Color32::from_white_alpha(8))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(20)))
                .rounding(16.0)
                .inner_margin(20.0)
                .outer_margin(8.0)
                .show(col, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("●").color(CYAN));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("SYS_0{}", i + 1))
                                    .monospace()
                                    .size(10.0)
                                    .weak(),
                            );
                        });
                    });
                    ui.add_space(12.0);
                    ui.label(egui::RichText::new(*title).size(18.0).color(egui::Color32::WHITE));
                    ui.label(egui::RichText::new(*desc).size(13.0).weak());
                });
        }
    });
}
