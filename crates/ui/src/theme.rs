use egui::{Color32, Rounding, Stroke, Visuals};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

#[derive(Clone, Debug)]
pub struct ThemeTokens {
    pub page_bg: Color32,
    pub toolbar_bg: Color32,
    pub border: Color32,
    pub control_idle: Color32,
    pub mic_active: Color32,
    pub highlight_fill: Color32,
    pub highlight_stroke: Color32,
    pub text_primary: Color32,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub tokens: ThemeTokens,
    pub visuals: Visuals,
}

pub fn theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => dark(),
        ThemeMode::Light => light(),
    }
}

pub fn light() -> Theme {
    let tokens = ThemeTokens {
        page_bg: Color32::WHITE,
        // white at 80%
        toolbar_bg: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 204),
        border: Color32::from_rgb(0xF3, 0xF4, 0xF6),
        control_idle: Color32::from_rgb(0x4B, 0x55, 0x63),
        mic_active: Color32::from_rgb(0x3B, 0x82, 0xF6),
        highlight_fill: Color32::from_rgba_unmultiplied(0x3B, 0x82, 0xF6, 48),
        highlight_stroke: Color32::from_rgb(0x3B, 0x82, 0xF6),
        text_primary: Color32::from_rgb(0x1F, 0x29, 0x37),
    };

    let mut visuals = Visuals::light();
    visuals.window_rounding = Rounding::same(10.0);
    visuals.panel_fill = tokens.page_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, tokens.border);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, tokens.control_idle);
    visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    visuals.selection.bg_fill = tokens.mic_active;

    Theme { tokens, visuals }
}

pub fn dark() -> Theme {
    let tokens = ThemeTokens {
        page_bg: Color32::from_rgb(0x11, 0x13, 0x18),
        toolbar_bg: Color32::from_rgba_unmultiplied(0x11, 0x13, 0x18, 204),
        border: Color32::from_rgb(0x23, 0x28, 0x34),
        control_idle: Color32::from_rgb(0xC7, 0xCC, 0xD4),
        mic_active: Color32::from_rgb(0x60, 0xA5, 0xFA),
        highlight_fill: Color32::from_rgba_unmultiplied(0x60, 0xA5, 0xFA, 56),
        highlight_stroke: Color32::from_rgb(0x60, 0xA5, 0xFA),
        text_primary: Color32::from_rgb(0xE6, 0xE6, 0xE6),
    };

    let mut visuals = Visuals::dark();
    visuals.window_rounding = Rounding::same(8.0);
    visuals.panel_fill = tokens.page_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, tokens.border);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, tokens.control_idle);
    visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    visuals.selection.bg_fill = tokens.mic_active;

    Theme { tokens, visuals }
}

pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
    ctx.set_visuals(theme(mode).visuals);
}

/// Text/dot colour and translucent background for a status badge.
pub fn badge_colors(rgb: [u8; 3], background_alpha: u8) -> (Color32, Color32) {
    let [r, g, b] = rgb;
    (
        Color32::from_rgb(r, g, b),
        Color32::from_rgba_unmultiplied(r, g, b, background_alpha),
    )
}

/// Opacity for the active-mic pulse: 1.0 -> 0.5 -> 1.0 every two seconds.
pub fn pulse_opacity(time_secs: f64) -> f32 {
    let phase = (time_secs / 2.0).fract() * std::f64::consts::TAU;
    (0.75 + 0.25 * phase.cos()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_background_keeps_hue() {
        let (fg, bg) = badge_colors([0x22, 0xC5, 0x5E], 26);
        assert_eq!(fg, Color32::from_rgb(0x22, 0xC5, 0x5E));
        assert_eq!(bg.a(), 26);
        assert_eq!(bg, Color32::from_rgba_unmultiplied(0x22, 0xC5, 0x5E, 26));
    }

    #[test]
    fn pulse_cycles_between_full_and_half() {
        assert!((pulse_opacity(0.0) - 1.0).abs() < 1e-6);
        assert!((pulse_opacity(1.0) - 0.5).abs() < 1e-6);
        assert!((pulse_opacity(2.0) - 1.0).abs() < 1e-6);
        for step in 0..100 {
            let o = pulse_opacity(step as f64 * 0.037);
            assert!((0.5..=1.0).contains(&o));
        }
    }

    #[test]
    fn themes_differ_in_mode() {
        assert!(theme(ThemeMode::Dark).visuals.dark_mode);
        assert!(!theme(ThemeMode::Light).visuals.dark_mode);
    }
}
