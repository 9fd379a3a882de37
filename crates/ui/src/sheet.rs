use std::path::Path;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, TextureId, Vec2};
#[allow(deprecated)]
use egui_extras::RetainedImage;
use tracing::{info, warn};

use crate::assets;

/// Bundled sheet relative to the asset roots.
pub const DEFAULT_SHEET: &str = "sheet-music.png";
pub const SHEET_ALT: &str = "Violin Sheet Music";
/// Highlight box size in points.
pub const HIGHLIGHT_SIZE: Vec2 = Vec2::new(20.0, 40.0);

/// The decoded sheet-music image, or nothing when it could not be loaded.
pub struct SheetImage {
    #[allow(deprecated)]
    image: Option<RetainedImage>,
    source: String,
}

impl SheetImage {
    /// Load `path`, or the bundled sheet when `path` is `None`.
    #[allow(deprecated)]
    pub fn load(path: Option<&Path>) -> Self {
        let found = match path {
            Some(path) => std::fs::read(path).ok().map(|bytes| (path.to_path_buf(), bytes)),
            None => assets::read_asset(DEFAULT_SHEET),
        };
        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| DEFAULT_SHEET.to_string());

        let Some((resolved, bytes)) = found else {
            warn!(%source, "sheet music image not found, drawing placeholder staff");
            return Self { image: None, source };
        };
        match RetainedImage::from_image_bytes(source.clone(), &bytes) {
            Ok(image) => {
                info!(path = %resolved.display(), size = ?image.size(), "loaded sheet music");
                Self {
                    image: Some(image),
                    source,
                }
            }
            Err(err) => {
                warn!(path = %resolved.display(), %err, "sheet music image could not be decoded");
                Self { image: None, source }
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    #[allow(deprecated)]
    pub fn texture(&self, ctx: &egui::Context) -> Option<(TextureId, Vec2)> {
        self.image
            .as_ref()
            .map(|image| (image.texture_id(ctx), image.size_vec2()))
    }
}

/// Largest rect with the image's aspect ratio that fits `available`,
/// anchored to its top-left corner.
pub fn fit_rect(available: Rect, image_size: Vec2) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return available;
    }
    let scale = (available.width() / image_size.x).min(available.height() / image_size.y);
    Rect::from_min_size(available.min, image_size * scale)
}

/// Screen rect of the highlight box for a percent position inside `sheet`.
pub fn highlight_rect(sheet: Rect, left_pct: f32, top_pct: f32) -> Rect {
    let min = Pos2::new(
        sheet.left() + sheet.width() * left_pct / 100.0,
        sheet.top() + sheet.height() * top_pct / 100.0,
    );
    Rect::from_min_size(min, HIGHLIGHT_SIZE)
}

/// Five staff lines per system plus the alt text, used when no image loaded.
pub fn draw_placeholder(painter: &Painter, rect: Rect, ink: Color32) {
    let stroke = Stroke::new(1.0, ink.linear_multiply(0.6));
    let systems = 4;
    let system_h = rect.height() / systems as f32;
    let gap = (system_h / 10.0).clamp(4.0, 10.0);
    for system in 0..systems {
        let top = rect.top() + system_h * system as f32 + system_h * 0.3;
        for line in 0..5 {
            let y = top + gap * line as f32;
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        }
    }
    painter.text(
        rect.center_bottom() - Vec2::new(0.0, 8.0),
        Align2::CENTER_BOTTOM,
        SHEET_ALT,
        FontId::proportional(14.0),
        ink,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_aspect_ratio() {
        let available = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(800.0, 600.0));
        let fitted = fit_rect(available, Vec2::new(1600.0, 800.0));
        assert_eq!(fitted.min, Pos2::new(10.0, 20.0));
        assert_eq!(fitted.size(), Vec2::new(800.0, 400.0));
    }

    #[test]
    fn highlight_rect_uses_percentages() {
        let sheet = Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(1000.0, 500.0));
        let rect = highlight_rect(sheet, 10.0, 28.0);
        assert_eq!(rect.min, Pos2::new(100.0, 240.0));
        assert_eq!(rect.size(), HIGHLIGHT_SIZE);
    }

    #[test]
    fn decoded_png_drives_layout() {
        let path = std::env::temp_dir().join(format!("staffline-sheet-{}.png", std::process::id()));
        image::RgbaImage::from_pixel(64, 32, image::Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();

        let sheet = SheetImage::load(Some(&path));
        std::fs::remove_file(&path).ok();
        assert!(sheet.is_loaded());

        let ctx = egui::Context::default();
        let (_, size) = sheet.texture(&ctx).unwrap();
        assert_eq!(size, Vec2::new(64.0, 32.0));

        let available = Rect::from_min_size(Pos2::ZERO, Vec2::new(640.0, 640.0));
        let fitted = fit_rect(available, size);
        assert_eq!(fitted.size(), Vec2::new(640.0, 320.0));

        let rect = highlight_rect(fitted, 50.0, 25.0);
        assert_eq!(rect.min, Pos2::new(320.0, 80.0));
        assert!(fitted.contains(rect.min));
    }

    #[test]
    fn bundled_sheet_loads() {
        let sheet = SheetImage::load(None);
        assert!(sheet.is_loaded());
        assert_eq!(sheet.source(), DEFAULT_SHEET);
    }

    #[test]
    fn missing_file_yields_placeholder() {
        let sheet = SheetImage::load(Some(Path::new("does-not-exist.png")));
        assert!(!sheet.is_loaded());
        assert_eq!(sheet.source(), "does-not-exist.png");
    }
}
