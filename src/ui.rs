use crate::app_state::{AppState, Page};
use crate::canvas::{self, ParticleFrame};
use crate::config::SiteConfig;
use crate::panels::{self, PanelContext, NEON};
use crate::shapes::ShapeVariant;
use eframe::egui;
use glam::Vec2;

pub struct KeyframeApp {
    state: AppState,
}

pub fn create_app(cc: &eframe::CreationContext<'_>, config: SiteConfig) -> KeyframeApp {
    let mut state = AppState::new(config);
    state.initialize_with_context(cc);
    cc.egui_ctx.set_visuals(egui::Visuals::dark());
    KeyframeApp { state }
}

/// Pointer position in normalised device coordinates of `rect`, y up.
pub fn pointer_ndc(pointer: Option<egui::Pos2>, rect: egui::Rect) -> Vec2 {
    match pointer {
        Some(p) if rect.width() > 0.0 && rect.height() > 0.0 => {
            let x = (p.x - rect.min.x) / rect.width() * 2.0 - 1.0;
            let y = 1.0 - (p.y - rect.min.y) / rect.height() * 2.0;
            Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
        }
        _ => Vec2::ZERO,
    }
}

impl eframe::App for KeyframeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;
        let now = ctx.input(|i| i.time);

        state.poll_logo(ctx);
        state.loading.tick(now, state.logo_done);

        let screen_rect = ctx.input(|i| i.screen_rect());
        state.view.set_viewport_width(screen_rect.width());

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            state.view.close_overlay();
        }

        let pointer = pointer_ndc(ctx.input(|i| i.pointer.hover_pos()), screen_rect);
        let (delta, elapsed) = state.tick(now);

        let gpu = state.gpu_enabled;
        if let Page::Legal(page) = &mut state.page {
            page.show(ctx, now, pointer, gpu);
        } else {
            state.step_scene(delta, elapsed, pointer);
            show_agency(ctx, state, now);
        }
        // both pages animate continuously
        ctx.request_repaint();

        state
            .loading
            .show(ctx, now, state.logo_texture.as_ref());
    }
}

/// Where the agency chrome landed this frame.
pub struct AgencyLayout {
    /// Area between the top bar and the service menu.
    pub stage: egui::Rect,
    /// Nav and service buttons by label.
    pub buttons: Vec<(&'static str, egui::Rect)>,
}

impl AgencyLayout {
    pub fn button(&self, label: &str) -> Option<egui::Rect> {
        self.buttons
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, rect)| *rect)
    }
}

fn show_agency(ctx: &egui::Context, state: &mut AppState, now: f64) -> AgencyLayout {
    let mut buttons = Vec::new();
    top_bar(ctx, state, &mut buttons);
    service_menu(ctx, state, &mut buttons);
    // measured before the central panel claims it
    let stage = ctx.available_rect();

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            if let Page::Agency { animator, camera } = &state.page {
                let aspect = rect.width() / rect.height().max(1.0);
                let frame = ParticleFrame {
                    positions: animator.positions(),
                    colors: Some(animator.colors()),
                    tint: [1.0; 3],
                    model: animator.model_matrix(),
                    view_proj: camera.view_projection(aspect),
                    opacity: animator.opacity(),
                    point_size: state.config.particles.point_size,
                };
                canvas::show(ui.painter(), rect, &frame, state.gpu_enabled);
            }
        });

    let pcx = PanelContext {
        now,
        opened_at: state.overlay_opened_at,
        portfolio_dir: &state.config.assets.portfolio_dir,
        stage,
    };
    panels::show(ctx, &mut state.view, &pcx);

    AgencyLayout { stage, buttons }
}

type Hits = Vec<(&'static str, egui::Rect)>;

fn nav_button(ui: &mut egui::Ui, label: &'static str, active: bool, hits: &mut Hits) -> bool {
    let color = if active { NEON } else { egui::Color32::GRAY };
    let response = ui
        .add(
            egui::Button::new(egui::RichText::new(label).monospace().size(12.0).color(color))
                .frame(false),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    hits.push((label, response.rect));
    response.clicked()
}

fn top_bar(ctx: &egui::Context, state: &mut AppState, hits: &mut Hits) {
    egui::TopBottomPanel::top("top_bar")
        .frame(egui::Frame::none().fill(egui::Color32::BLACK).inner_margin(16.0))
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(texture) = &state.logo_texture {
                    let size = texture.size_vec2();
                    let h = 28.0;
                    ui.image((texture.id(), egui::vec2(size.x / size.y.max(1.0) * h, h)));
                }
                let brand = ui.add(
                    egui::Label::new(
                        egui::RichText::new("KEYFRAME")
                            .strong()
                            .size(18.0)
                            .color(egui::Color32::WHITE),
                    )
                    .sense(egui::Sense::click()),
                );
                if brand.clicked() {
                    state.view.close_overlay();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let view = &mut state.view;
                    let contact_active = view.is_contact_open() && view.shape().is_idle();
                    if nav_button(ui, "CONTACT", contact_active, hits) {
                        view.open_contact();
                    }
                    if nav_button(ui, "LEGACY", view.is_legacy_open(), hits) {
                        view.open_legacy();
                    }
                    if nav_button(ui, "CLIENTS", view.is_clients_open(), hits) {
                        view.open_clients();
                    }
                    if nav_button(ui, "PORTFOLIO", view.is_portfolio_open(), hits) {
                        view.open_portfolio();
                    }
                });
            });
        });
}

fn service_menu(ctx: &egui::Context, state: &mut AppState, hits: &mut Hits) {
    egui::TopBottomPanel::bottom("service_menu")
        .frame(egui::Frame::none().fill(egui::Color32::BLACK).inner_margin(20.0))
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    let count = ShapeVariant::SERVICES.len() as f32;
                    let approx = count * 110.0;
                    ui.add_space(((ui.available_width() - approx) / 2.0).max(0.0));
                    for shape in ShapeVariant::SERVICES {
                        let active = state.view.shape() == shape;
                        if nav_button(ui, shape.label(), active, hits) {
                            if active {
                                state.view.close_overlay();
                            } else {
                                state.view.select_shape(shape);
                            }
                        }
                        ui.add_space(24.0);
                    }
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParticleConfig, SiteConfig};
    use crate::view_state::Overlay;

    #[test]
    fn pointer_maps_to_ndc() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        assert_eq!(pointer_ndc(Some(egui::pos2(100.0, 50.0)), rect), Vec2::ZERO);
        assert_eq!(pointer_ndc(Some(egui::pos2(0.0, 0.0)), rect), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_ndc(Some(egui::pos2(200.0, 100.0)), rect), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_ndc(None, rect), Vec2::ZERO);
    }

    struct Harness {
        ctx: egui::Context,
        state: AppState,
        time: f64,
    }

    impl Harness {
        fn new() -> Self {
            let config = SiteConfig {
                particles: ParticleConfig {
                    count: 100,
                    flash_probability: 0.0,
                    ..ParticleConfig::default()
                },
                ..SiteConfig::default()
            };
            Self {
                ctx: egui::Context::default(),
                state: AppState::new(config),
                time: 0.0,
            }
        }

        fn frame(&mut self, events: Vec<egui::Event>) -> AgencyLayout {
            self.time += 1.0 / 60.0;
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(1280.0, 800.0),
                )),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let now = self.time;
            let state = &mut self.state;
            let mut layout = None;
            let _ = self.ctx.run(input, |ctx| {
                state.tick(now);
                layout = Some(show_agency(ctx, state, now));
            });
            layout.expect("frame ran")
        }

        fn click(&mut self, pos: egui::Pos2) -> AgencyLayout {
            let button = |pressed| egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::default(),
            };
            self.frame(vec![egui::Event::PointerMoved(pos), button(true)]);
            self.frame(vec![button(false)])
        }
    }

    #[test]
    fn nav_switches_overlays_while_one_is_open() {
        let mut h = Harness::new();
        h.state.view.open_contact();
        let layout = h.frame(Vec::new());
        let portfolio = layout.button("PORTFOLIO").expect("portfolio button");
        assert!(!layout.stage.contains(portfolio.center()));

        h.click(portfolio.center());
        assert_eq!(h.state.view.overlay(), Overlay::Portfolio);

        let layout = h.frame(Vec::new());
        let clients = layout.button("CLIENTS").expect("clients button");
        h.click(clients.center());
        assert_eq!(h.state.view.overlay(), Overlay::Clients);
    }

    #[test]
    fn service_menu_switches_shapes_inside_the_dashboard() {
        let mut h = Harness::new();
        h.state.view.select_shape(ShapeVariant::Studio);
        let layout = h.frame(Vec::new());
        let strategy = layout.button("STRATEGY").expect("strategy button");

        h.click(strategy.center());
        assert_eq!(h.state.view.overlay(), Overlay::Contact);
        assert_eq!(h.state.view.shape(), ShapeVariant::Strategy);

        // the active label toggles the dashboard shut
        h.click(strategy.center());
        assert_eq!(h.state.view.overlay(), Overlay::None);
        assert!(h.state.view.shape().is_idle());
    }

    #[test]
    fn backdrop_click_still_closes() {
        let mut h = Harness::new();
        h.state.view.open_legacy();
        let layout = h.frame(Vec::new());
        let corner = layout.stage.left_bottom() + egui::vec2(4.0, -4.0);
        h.click(corner);
        assert_eq!(h.state.view.overlay(), Overlay::None);
    }
}
