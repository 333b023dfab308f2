use super::content::{MediaKind, Project, PROJECTS};
use super::{card_frame, NEON};
use eframe::egui;
use std::path::Path;

const GRID_COLUMNS: usize = 3;

/// egui loader uri for project `index` (0-based). Files are numbered from 1.
pub fn image_uri(dir: &Path, index: usize) -> String {
    format!("file://{}", dir.join(format!("{}.jpg", index + 1)).display())
}

fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "▶ VIDEO",
        MediaKind::Image => "IMAGE",
    }
}

fn accent(project: &Project) -> egui::Color32 {
    let [r, g, b] = project.accent;
    egui::Color32::from_rgb(r, g, b)
}

/// Desktop: three-column grid of 16:9 tiles. A tile whose image fails to
/// load falls back to egui's placeholder.
pub fn show_grid(ui: &mut egui::Ui, dir: &Path) {
    let spacing = 16.0;
    let tile_w = (ui.available_width() - spacing * (GRID_COLUMNS as f32 - 1.0)) / GRID_COLUMNS as f32;
    let tile = egui::vec2(tile_w, tile_w * 9.0 / 16.0);

    egui::Grid::new("portfolio_grid")
        .spacing(egui::vec2(spacing, spacing))
        .show(ui, |ui| {
            for (i, project) in PROJECTS.iter().enumerate() {
                ui.vertical(|ui| {
                    let image = egui::Image::new(image_uri(dir, i))
                        .fit_to_exact_size(tile)
                        .rounding(12.0)
                        .show_loading_spinner(true);
                    let response = ui
                        .add(image)
                        .on_hover_text(project.desc);
                    if response.hovered() {
                        ui.painter().rect_filled(
                            response.rect,
                            12.0,
                            egui::Color32::from_black_alpha(140),
                        );
                    }
                    ui.label(egui::RichText::new(project.title).strong().color(egui::Color32::WHITE));
                    ui.label(
                        egui::RichText::new(format!("{}  ·  {}", project.category, kind_label(project.kind)))
                            .monospace()
                            .size(10.0)
                            .color(NEON),
                    );
                });
                if (i + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}

/// Mobile: single column of text cards with an accent bar.
pub fn show_list(ui: &mut egui::Ui) {
    for project in &PROJECTS {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (bar, _) = ui.allocate_exact_size(egui::vec2(3.0, 48.0), egui::Sense::hover());
                ui.painter().rect_filled(bar, 1.0, accent(project));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(project.title).strong().color(egui::Color32::WHITE));
                    ui.label(
                        egui::RichText::new(kind_label(project.kind))
                            .monospace()
                            .size(10.0)
                            .color(accent(project)),
                    );
                    ui.label(egui::RichText::new(project.desc).size(12.0).weak());
                });
            });
        });
        ui.add_space(8.0);
    }
}
