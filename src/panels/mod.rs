pub mod about;
pub mod content;
pub mod dashboard;
pub mod portfolio;

use crate::view_state::{Overlay, ViewState};
use eframe::egui;
use std::path::Path;

pub const NEON: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xff, 0x1a);
const OPEN_SECS: f32 = 0.5;

/// Per-frame inputs the overlays need besides the view state.
pub struct PanelContext<'a> {
    pub now: f64,
    /// When the current overlay was opened.
    pub opened_at: f64,
    pub portfolio_dir: &'a Path,
    /// Screen area left between the top bar and the service menu. The
    /// backdrop and card stay inside it so the nav remains clickable.
    pub stage: egui::Rect,
}

/// Opening animation: cubic ease-out from 0 to 1 over half a second.
pub fn open_progress(now: f64, opened_at: f64) -> f32 {
    let t = ((now - opened_at) as f32 / OPEN_SECS).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Draw whichever overlay `view` has open. Closing (X, backdrop click) is
/// applied to `view` directly.
pub fn show(ctx: &egui::Context, view: &mut ViewState, pcx: &PanelContext<'_>) {
    let overlay = view.overlay();
    let (title, subtitle, max_width) = match overlay {
        Overlay::None => return,
        Overlay::Contact => {
            let content = content::dashboard_for(view.shape());
            (content.title(), content.subtitle(), 760.0)
        }
        Overlay::Portfolio if view.is_mobile() => ("PORTFOLIO", "SELECTED WORKS", 900.0),
        Overlay::Portfolio => ("PORTFOLIO", "SELECTED WORKS 2023-2025", 1020.0),
        Overlay::Clients => ("NETWORK", "ALLIES & TRANSMISSIONS", 900.0),
        Overlay::Legacy => ("OUR LEGACY", "DRIVEN BY LOYALTY. GUIDED BY LOGIC.", 900.0),
    };

    let mobile = view.is_mobile();
    let shape = view.shape();
    let close = overlay_frame(ctx, pcx, title, subtitle, max_width, |ui| match overlay {
        Overlay::Contact => dashboard::show(ui, shape, mobile),
        Overlay::Portfolio if mobile => portfolio::show_list(ui),
        Overlay::Portfolio => portfolio::show_grid(ui, pcx.portfolio_dir),
        Overlay::Clients => about::show_clients(ui, mobile),
        Overlay::Legacy => about::show_legacy(ui),
        Overlay::None => {}
    });
    if close {
        view.close_overlay();
    }
}

/// Backdrop plus a centred glass card holding a header and `add_contents`.
/// Returns `true` when the user asked to close it.
fn overlay_frame(
    ctx: &egui::Context,
    pcx: &PanelContext<'_>,
    title: &str,
    subtitle: &str,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> bool {
    let t = open_progress(pcx.now, pcx.opened_at);
    if t < 1.0 {
        ctx.request_repaint();
    }
    let stage = pcx.stage;
    let mut close = false;

    egui::Area::new("overlay_backdrop")
        .fixed_pos(stage.min)
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(stage, 0.0, egui::Color32::from_black_alpha((120.0 * t) as u8));
            let backdrop = ui.allocate_rect(stage, egui::Sense::click());
            if backdrop.clicked() {
                close = true;
            }
        });

    let width = (stage.width() - 32.0).min(max_width);
    let max_height = stage.height() * 0.92;
    let slide = 20.0 * (1.0 - t);
    let pos = egui::pos2(
        stage.center().x - width / 2.0,
        stage.min.y + (stage.height() - max_height) / 2.0 + slide,
    );

    let card = egui::Area::new("overlay_card")
        .fixed_pos(pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_black_alpha((200.0 * t) as u8))
                .rounding(24.0)
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(25)))
                .inner_margin(28.0)
                .show(ui, |ui| {
                    ui.set_width(width - 56.0);
                    ui.set_max_height(max_height - 56.0);
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(title)
                                    .size(40.0)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                            ui.label(
                                egui::RichText::new(format!("/// {}", subtitle))
                                    .monospace()
                                    .size(12.0)
                                    .color(NEON),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            let x = egui::Button::new(
                                egui::RichText::new("X").monospace().size(18.0),
                            )
                            .frame(false);
                            if ui.add(x).clicked() {
                                close = true;
                            }
                        });
                    });
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(12.0);
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, true])
                        .show(ui, add_contents);
                });
        });
    // a backdrop click raises the backdrop; keep the card above it
    ctx.move_to_top(card.response.layer_id);

    close
}

/// Small helper for the dark cards used across the panels.
pub(crate) fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(egui::Color32::from_white_alpha(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(12)))
        .rounding(12.0)
        .inner_margin(14.0)
}
