use eframe::egui;

/// Upper bound on how long the loading screen waits for assets.
pub const FAILSAFE_SECS: f64 = 1.0;
pub const FADE_SECS: f64 = 0.5;

/// Splash shown until the logo has loaded (or the failsafe fires), then faded
/// out over the scene.
#[derive(Clone, Debug, Default)]
pub struct LoadingScreen {
    started_at: Option<f64>,
    finished_at: Option<f64>,
}

impl LoadingScreen {
    /// Advance the timers. `assets_ready` flips to `true` once the logo load
    /// has completed, successfully or not.
    pub fn tick(&mut self, now: f64, assets_ready: bool) {
        let started = *self.started_at.get_or_insert(now);
        if self.finished_at.is_none() && (assets_ready || now - started >= FAILSAFE_SECS) {
            tracing::debug!(after = now - started, assets_ready, "loading screen finished");
            self.finished_at = Some(now);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Overlay opacity: 1 while loading, then down to 0 over the fade.
    pub fn opacity(&self, now: f64) -> f32 {
        match self.finished_at {
            None => 1.0,
            Some(t) => (1.0 - (now - t) / FADE_SECS).clamp(0.0, 1.0) as f32,
        }
    }

    pub fn is_visible(&self, now: f64) -> bool {
        self.opacity(now) > 0.0
    }

    pub fn show(&self, ctx: &egui::Context, now: f64, logo: Option<&egui::TextureHandle>) {
        let opacity = self.opacity(now);
        if opacity <= 0.0 {
            return;
        }
        ctx.request_repaint();

        let screen_rect = ctx.input(|i| i.screen_rect());
        let area = egui::Area::new("loading_screen")
            .fixed_pos(screen_rect.min)
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                let painter = ui.painter();
                painter.rect_filled(
                    screen_rect,
                    0.0,
                    egui::Color32::from_black_alpha((255.0 * opacity) as u8),
                );
                let tint = egui::Color32::WHITE.gamma_multiply(opacity);
                let centre = screen_rect.center();
                if let Some(texture) = logo {
                    let size = texture.size_vec2();
                    let scale = (160.0 / size.x.max(size.y)).min(1.0);
                    let rect = egui::Rect::from_center_size(centre, size * scale);
                    painter.image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        tint,
                    );
                }
                painter.text(
                    centre + egui::vec2(0.0, 110.0),
                    egui::Align2::CENTER_CENTER,
                    "KEYFRAME",
                    egui::FontId::monospace(12.0),
                    tint,
                );
            });
        ctx.move_to_top(area.response.layer_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_when_assets_arrive() {
        let mut screen = LoadingScreen::default();
        screen.tick(10.0, false);
        screen.tick(10.3, false);
        assert!(!screen.is_finished());
        screen.tick(10.4, true);
        assert!(screen.is_finished());
        assert_eq!(screen.opacity(10.4), 1.0);
    }

    #[test]
    fn failsafe_fires_after_a_second() {
        let mut screen = LoadingScreen::default();
        screen.tick(2.0, false);
        screen.tick(2.99, false);
        assert!(!screen.is_finished());
        screen.tick(3.0, false);
        assert!(screen.is_finished());
    }

    #[test]
    fn fades_out_over_half_a_second() {
        let mut screen = LoadingScreen::default();
        screen.tick(0.0, true);
        assert!((screen.opacity(0.25) - 0.5).abs() < 1e-6);
        assert!(screen.is_visible(0.49));
        assert!(!screen.is_visible(0.5));
        assert_eq!(screen.opacity(5.0), 0.0);
    }

    #[test]
    fn finish_time_is_latched() {
        let mut screen = LoadingScreen::default();
        screen.tick(0.0, true);
        screen.tick(0.4, true);
        assert!(!screen.is_visible(0.6));
    }
}
