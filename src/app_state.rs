use crate::animations::{FrameInput, SceneAnimator};
use crate::camera::{CameraPose, CameraRig};
use crate::config::{SiteConfig, SiteVariant};
use crate::legal::LegalPage;
use crate::loading_screen::LoadingScreen;
use crate::view_state::{Overlay, ViewState};
use glam::Vec2;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Which landing page is mounted. Built once from the config.
pub enum Page {
    Agency {
        animator: SceneAnimator,
        camera: CameraRig,
    },
    Legal(LegalPage),
}

pub struct AppState {
    pub config: SiteConfig,
    pub view: ViewState,
    pub page: Page,

    pub loading: LoadingScreen,
    pub logo_rx: Option<Receiver<Option<egui::ColorImage>>>,
    pub logo_texture: Option<egui::TextureHandle>,
    /// Set once the logo load has finished, whatever the outcome.
    pub logo_done: bool,

    pub gpu_enabled: bool,

    /// Time the current overlay was opened, for its entrance animation.
    pub overlay_opened_at: f64,
    last_overlay: Overlay,
    last_time: Option<f64>,
    start_time: Option<f64>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let view = ViewState::new(config.camera.mobile_breakpoint);
        let page = match config.variant {
            SiteVariant::Agency => Page::Agency {
                animator: SceneAnimator::new(
                    config.particles.count,
                    config.particles.seed,
                    config.morph_settings(),
                ),
                camera: CameraRig::new(
                    CameraPose::for_view(&view),
                    config.camera.fov_degrees,
                    config.camera.smoothing,
                ),
            },
            SiteVariant::Legal => Page::Legal(LegalPage::new(config.particles.seed)),
        };
        Self {
            config,
            view,
            page,
            loading: LoadingScreen::default(),
            logo_rx: None,
            logo_texture: None,
            logo_done: false,
            gpu_enabled: false,
            overlay_opened_at: 0.0,
            last_overlay: Overlay::None,
            last_time: None,
            start_time: None,
        }
    }

    pub fn initialize_with_context(&mut self, cc: &eframe::CreationContext<'_>) {
        #[cfg(feature = "wgpu")]
        {
            self.gpu_enabled = crate::canvas::gpu::install(cc);
        }
        if !self.gpu_enabled {
            tracing::info!("wgpu unavailable, drawing particles on the CPU");
        }
        egui_extras::install_image_loaders(&cc.egui_ctx);
        self.logo_rx = Some(crate::logo::spawn_logo_loader(self.config.assets.logo.clone()));
    }

    /// Advance the clock. Returns `(delta, elapsed)` in seconds; the first
    /// frame has a zero delta.
    pub fn tick(&mut self, now: f64) -> (f32, f32) {
        let start = *self.start_time.get_or_insert(now);
        let delta = self.last_time.map_or(0.0, |t| (now - t).max(0.0));
        self.last_time = Some(now);

        if self.view.overlay() != self.last_overlay {
            self.last_overlay = self.view.overlay();
            self.overlay_opened_at = now;
        }
        (delta as f32, (now - start) as f32)
    }

    /// Non-blocking check on the logo worker.
    pub fn poll_logo(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.logo_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(image) => {
                if let Some(image) = image {
                    self.logo_texture =
                        Some(ctx.load_texture("logo", image, egui::TextureOptions::LINEAR));
                }
                self.logo_done = true;
                self.logo_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.logo_done = true;
                self.logo_rx = None;
            }
        }
    }

    /// Step the hero scene: particles toward the view's shape, camera toward
    /// the view's pose.
    pub fn step_scene(&mut self, delta: f32, elapsed: f32, pointer: Vec2) {
        if let Page::Agency { animator, camera } = &mut self.page {
            let input = FrameInput {
                delta,
                elapsed,
                pointer,
            };
            animator.step(self.view.shape(), &input);
            camera.update(CameraPose::for_view(&self.view), delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParticleConfig;
    use crate::shapes::ShapeVariant;
    use std::sync::mpsc;

    fn small_config() -> SiteConfig {
        SiteConfig {
            particles: ParticleConfig {
                count: 200,
                flash_probability: 0.0,
                ..ParticleConfig::default()
            },
            ..SiteConfig::default()
        }
    }

    #[test]
    fn first_frame_has_no_delta() {
        let mut state = AppState::new(small_config());
        assert_eq!(state.tick(5.0), (0.0, 0.0));
        let (delta, elapsed) = state.tick(5.5);
        assert!((delta - 0.5).abs() < 1e-6);
        assert!((elapsed - 0.5).abs() < 1e-6);
    }

    #[test]
    fn overlay_open_time_is_recorded() {
        let mut state = AppState::new(small_config());
        state.tick(1.0);
        state.view.open_portfolio();
        state.tick(2.0);
        assert_eq!(state.overlay_opened_at, 2.0);
        state.tick(3.0);
        assert_eq!(state.overlay_opened_at, 2.0);
    }

    #[test]
    fn scene_follows_the_view() {
        let mut state = AppState::new(small_config());
        state.view.select_shape(ShapeVariant::Global);
        for _ in 0..600 {
            state.step_scene(1.0 / 60.0, 0.0, Vec2::ZERO);
        }
        match &state.page {
            Page::Agency { animator, camera } => {
                let target = animator.target(ShapeVariant::Global);
                let gap = animator
                    .positions()
                    .iter()
                    .zip(target)
                    .map(|(a, b)| (a - b).abs())
                    .fold(0.0f32, f32::max);
                assert!(gap < 1e-3);
                assert!((camera.pose().distance - 6.5).abs() < 1e-3);
            }
            Page::Legal(_) => panic!("agency page expected"),
        }
    }

    #[test]
    fn legal_variant_mounts_the_nebula() {
        let config = SiteConfig {
            variant: SiteVariant::Legal,
            ..small_config()
        };
        assert!(matches!(AppState::new(config).page, Page::Legal(_)));
    }

    #[test]
    fn logo_failure_still_finishes_loading() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(small_config());
        let (tx, rx) = mpsc::channel();
        state.logo_rx = Some(rx);

        state.poll_logo(&ctx);
        assert!(!state.logo_done);

        tx.send(None).unwrap();
        state.poll_logo(&ctx);
        assert!(state.logo_done);
        assert!(state.logo_texture.is_none());
    }

    #[test]
    fn logo_image_becomes_a_texture() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(small_config());
        let (tx, rx) = mpsc::channel();
        state.logo_rx = Some(rx);
        tx.send(Some(egui::ColorImage::new([4, 4], egui::Color32::WHITE)))
            .unwrap();
        state.poll_logo(&ctx);
        assert!(state.logo_done);
        assert_eq!(state.logo_texture.as_ref().map(|t| t.size()), Some([4, 4]));
    }
}
