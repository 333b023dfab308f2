//! Clients and legacy overlays. Static copy only.
use super::content::{CLIENTS, LEGACY, LEGACY_INTRO, REVIEWS};
use super::{card_frame, NEON};
use eframe::egui;

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(18.0);
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .monospace()
            .size(11.0)
            .weak(),
    );
    ui.add_space(8.0);
}

pub fn show_clients(ui: &mut egui::Ui, mobile: bool) {
    section_heading(ui, "Deployments");
    let columns = if mobile { 2 } else { 3 };
    egui::Grid::new("client_grid")
        .num_columns(columns)
        .spacing(egui::vec2(12.0, 12.0))
        .show(ui, |ui| {
            for (i, client) in CLIENTS.iter().enumerate() {
                card_frame().show(ui, |ui| {
                    ui.set_min_size(egui::vec2(140.0, 48.0));
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(client.name).strong());
                        ui.label(egui::RichText::new(client.industry).monospace().size(10.0).weak());
                    });
                });
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

    section_heading(ui, "Incoming Transmissions");
    for review in &REVIEWS {
        ui.horizontal(|ui| {
            let (bar, _) = ui.allocate_exact_size(egui::vec2(2.0, 64.0), egui::Sense::hover());
            ui.painter().rect_filled(bar, 0.0, NEON.gamma_multiply(0.5));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(format!("\"{}\"", review.text)).italics());
                ui.label(egui::RichText::new(review.author).strong().size(13.0));
                ui.label(egui::RichText::new(review.role).monospace().size(10.0).color(NEON));
            });
        });
        ui.add_space(12.0);
    }
}

pub fn show_legacy(ui: &mut egui::Ui) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(LEGACY_INTRO);
    });

    for section in &LEGACY {
        section_heading(ui, section.heading);
        for paragraph in section.paragraphs {
            ui.label(*paragraph);
            ui.add_space(6.0);
        }
        for (title, body) in section.callouts {
            card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(*title).strong().color(egui::Color32::WHITE));
                ui.label(egui::RichText::new(*body).size(12.0).weak());
            });
            ui.add_space(6.0);
        }
    }
}
