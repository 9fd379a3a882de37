use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use egui::{Color32, Context, TextureId, Ui};
#[allow(deprecated)]
use egui_extras::RetainedImage;
use once_cell::sync::Lazy;
use tracing::warn;

use crate::assets;

// egui frees a texture when its RetainedImage drops, so the cache owns them.
#[allow(deprecated)]
static CACHE: Lazy<Mutex<HashMap<&'static str, RetainedImage>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));
static MISSING: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Lucide file names to try for each toolbar icon, newest name first.
fn alias_list(name: &str) -> Vec<&str> {
    match name {
        "settings" => vec!["settings", "cog"],
        "x" => vec!["x", "close"],
        "mic" => vec!["mic", "microphone"],
        _ => vec![name],
    }
}

/// Texture for a Lucide SVG under `assets/icons/lucide/`, or `None` so the
/// caller can fall back to a text button.
#[allow(deprecated)]
pub fn icon_tex(ctx: &Context, name: &'static str) -> Option<TextureId> {
    if let Some(img) = CACHE.lock().ok()?.get(name) {
        return Some(img.texture_id(ctx));
    }
    if MISSING.lock().ok()?.contains(name) {
        return None;
    }

    for candidate in alias_list(name) {
        let Some((path, bytes)) = assets::read_asset(&format!("icons/lucide/{candidate}.svg")) else {
            continue;
        };
        match RetainedImage::from_svg_bytes(candidate, &bytes) {
            Ok(img) => {
                let id = img.texture_id(ctx);
                CACHE.lock().ok()?.insert(name, img);
                return Some(id);
            }
            Err(err) => warn!(path = %path.display(), %err, "icon failed to rasterize"),
        }
    }

    if let Ok(mut missing) = MISSING.lock() {
        if missing.insert(name) {
            warn!(icon = name, aliases = ?alias_list(name), "missing icon svg, using text label");
        }
    }
    None
}

/// Brighten `base` while hovered, a bit more while pressed.
pub fn hover_tint(ui: &Ui, base: Color32, hovered: bool, pressed: bool, id: &str) -> Color32 {
    let key = egui::Id::new(("icon_hover", id));
    let t = ui.ctx().animate_bool(key, hovered || pressed);
    let factor = if pressed { 1.20 } else { 1.08 };
    base.linear_multiply(1.0 + (factor - 1.0) * t)
}

/// Size multiplier in `1.0..=scale` driven by hover/press.
pub fn hover_scale(ui: &Ui, hovered: bool, pressed: bool, id: &str, scale: f32) -> f32 {
    let key = egui::Id::new(("icon_scale", id));
    let t = ui.ctx().animate_bool(key, hovered || pressed);
    egui::lerp(1.0..=scale, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_start_with_requested_name() {
        for name in ["mic", "play", "pause", "settings", "x"] {
            assert_eq!(alias_list(name)[0], name);
        }
        assert_eq!(alias_list("settings"), vec!["settings", "cog"]);
    }
}
