use super::content::{dashboard_for, ContactCard, DashboardContent, ServiceCard};
use super::{card_frame, NEON};
use crate::shapes::ShapeVariant;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, shape: ShapeVariant, mobile: bool) {
    let columns = if mobile { 1 } else { 3 };
    match dashboard_for(shape) {
        DashboardContent::Contact(cards) => {
            for card in cards {
                contact_card(ui, card);
                ui.add_space(8.0);
            }
        }
        DashboardContent::Service(content) => {
            let mut row: Vec<&ServiceCard> = Vec::new();
            let mut used = 0;
            for card in &content.cards {
                let span = if card.wide && !mobile { 2 } else { 1 };
                if used + span > columns {
                    service_row(ui, &row);
                    row.clear();
                    used = 0;
                }
                row.push(card);
                used += span;
            }
            if !row.is_empty() {
                service_row(ui, &row);
            }

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                let cta = egui::Button::new(
                    egui::RichText::new(format!("{}  →", content.cta_text))
                        .monospace()
                        .color(NEON),
                )
                .rounding(20.0)
                .stroke(egui::Stroke::new(1.0, NEON.gamma_multiply(0.5)));
                if ui.add(cta).clicked() {
                    open_link(ui.ctx(), content.cta_link, false);
                }
            });
        }
    }
}

fn contact_card(ui: &mut egui::Ui, card: &ContactCard) {
    let response = card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(card.title).size(18.0).strong().color(egui::Color32::WHITE));
            ui.label(egui::RichText::new(card.label).monospace().size(11.0).weak());
            ui.label(egui::RichText::new(card.display).monospace().size(11.0).color(NEON));
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        open_link(ui.ctx(), card.url, card.opens_in_new_tab());
    }
}

fn service_row(ui: &mut egui::Ui, row: &[&ServiceCard]) {
    ui.horizontal_top(|ui| {
        let spacing = ui.spacing().item_spacing.x;
        let span = |card: &ServiceCard| if card.wide && row.len() > 1 { 2.0 } else { 1.0 };
        let total: f32 = row.iter().map(|c| span(*c)).sum();
        let unit = (ui.available_width() - spacing * (row.len() as f32 - 1.0)) / total.max(1.0);
        for card in row {
            let cols = span(*card);
            card_frame().show(ui, |ui| {
                ui.set_width(unit * cols - 28.0);
                ui.label(egui::RichText::new(card.title).size(17.0).strong().color(egui::Color32::WHITE));
                ui.label(egui::RichText::new(card.desc).size(13.0));
                ui.label(egui::RichText::new(card.detail).monospace().size(10.0).weak());
            });
        }
    });
    ui.add_space(8.0);
}

fn open_link(ctx: &egui::Context, url: &str, new_tab: bool) {
    tracing::debug!(url, new_tab, "opening link");
    ctx.open_url(egui::OpenUrl {
        url: url.to_owned(),
        new_tab,
    });
}
