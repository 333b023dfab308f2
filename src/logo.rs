use anyhow::{Context, Result};
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use usvg::TreeParsing;

/// Longest edge of the rasterised logo, in pixels.
pub const LOGO_RASTER_SIZE: u32 = 256;
const ICON_SIZE: u32 = 64;

/// Render an SVG document to RGBA8 pixels, scaled so its longest edge is
/// `max_side`. Returns `(width, height, unmultiplied rgba)`.
pub fn rasterize_svg(svg_data: &[u8], max_side: u32) -> Result<(u32, u32, Vec<u8>)> {
    let opt = usvg::Options::default();
    let rtree = usvg::Tree::from_data(svg_data, &opt).context("invalid svg")?;

    let size = rtree.size;
    let scale = max_side as f32 / size.width().max(size.height()).max(1.0);
    let width = ((size.width() * scale).round() as u32).max(1);
    let height = ((size.height() * scale).round() as u32).max(1);

    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(width, height).context("zero-sized logo pixmap")?;
    let render_rtree = resvg::Tree::from_usvg(&rtree);
    render_rtree.render(
        usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied pixels; a PNG round trip through `image`
    // hands back straight alpha.
    let png = pixmap.encode_png().context("encoding logo png")?;
    let rgba = image::load_from_memory(&png)
        .context("decoding logo png")?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok((w, h, rgba.into_raw()))
}

pub fn load_logo(path: &Path) -> Result<egui::ColorImage> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let (w, h, pixels) = rasterize_svg(&data, LOGO_RASTER_SIZE)?;
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        &pixels,
    ))
}

/// Window icon from the same SVG. `None` (with a warning) if it can't be read.
pub fn load_icon(path: &Path) -> Option<egui::IconData> {
    let result = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))
        .and_then(|data| rasterize_svg(&data, ICON_SIZE));
    match result {
        Ok((width, height, rgba)) => Some(egui::IconData {
            rgba,
            width,
            height,
        }),
        Err(err) => {
            tracing::warn!("window icon unavailable: {:#}", err);
            None
        }
    }
}

/// Rasterise the logo on a worker thread. The receiver yields exactly one
/// message: the image, or `None` if loading failed.
pub fn spawn_logo_loader(path: PathBuf) -> Receiver<Option<egui::ColorImage>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let image = match load_logo(&path) {
            Ok(image) => {
                tracing::debug!(path = %path.display(), size = ?image.size, "logo rasterised");
                Some(image)
            }
            Err(err) => {
                tracing::warn!("logo unavailable: {:#}", err);
                None
            }
        };
        // the app may already be gone
        let _ = tx.send(image);
    });
    rx
}
