mod animations;
mod app_state;
mod camera;
mod canvas;
mod config;
mod legal;
mod loading_screen;
mod logo;
mod panels;
mod shapes;
mod ui;
mod view_state;

use anyhow::{anyhow, Result};
use config::SiteConfig;
use tracing_subscriber::EnvFilter;

const FALLBACK_WINDOW: [f32; 2] = [1280.0, 800.0];

/// Initial window size: most of the primary display, in logical pixels.
fn initial_window_size() -> [f32; 2] {
    let displays = match display_info::DisplayInfo::all() {
        Ok(displays) => displays,
        Err(err) => {
            tracing::warn!(%err, "could not query displays");
            return FALLBACK_WINDOW;
        }
    };
    let Some(primary) = displays
        .iter()
        .find(|d| d.is_primary)
        .or_else(|| displays.first())
    else {
        return FALLBACK_WINDOW;
    };
    let scale = primary.scale_factor.max(1.0);
    let width = primary.width as f32 / scale * 0.8;
    let height = primary.height as f32 / scale * 0.8;
    [width.max(800.0), height.max(600.0)]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keyframe_ui=info")),
        )
        .init();

    let config = SiteConfig::load_or_default();
    let size = initial_window_size();
    tracing::info!(width = size[0], height = size[1], "opening window");

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("KEYFRAME")
        .with_inner_size(size)
        .with_min_inner_size([360.0, 480.0]);
    if let Some(icon) = logo::load_icon(&config.assets.logo) {
        viewport = viewport.with_icon(icon);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "KEYFRAME",
        native_options,
        Box::new(move |cc| Box::new(ui::create_app(cc, config))),
    )
    .map_err(|err| anyhow!("eframe failed: {err}"))
}
