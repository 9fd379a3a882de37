use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align, Color32, Layout, Rect, RichText, Sense, Stroke, Ui};
use staffline_domain::HighlightMode;
use staffline_tutor::{PracticeViewState, TransportIcon, Tween};
use staffline_ui::sheet::{self, SheetImage};
use staffline_ui::icons;
use staffline_ui::theme::{self as ui_theme, ThemeTokens};

pub const TOOLBAR_HEIGHT: f32 = 64.0;
pub const STATUS_PANEL_WIDTH: f32 = 256.0;
const SHEET_PADDING: f32 = 16.0;

/// Things the view asks its host to do; the view itself only touches local state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewRequest {
    OpenSettings,
    Close,
}

/// Renders the practice screen over a [`PracticeViewState`].
pub struct PracticeView {
    state: PracticeViewState,
    sheet: SheetImage,
    tween: Tween,
}

impl PracticeView {
    pub fn mount(mode: HighlightMode, sheet_path: Option<&Path>) -> Self {
        let state = PracticeViewState::with_mode(mode);
        let tween = Tween::settled(state.position(), Instant::now());
        Self {
            state,
            sheet: SheetImage::load(sheet_path),
            tween,
        }
    }

    pub fn state(&self) -> &PracticeViewState {
        &self.state
    }

    pub fn reload_sheet(&mut self, sheet_path: Option<&Path>) {
        self.sheet = SheetImage::load(sheet_path);
    }

    pub fn teardown(&mut self) {
        self.state.teardown(Instant::now());
    }

    /// Step the animation to `now` and aim the eased box at the new position.
    fn advance(&mut self, now: Instant, reduced_motion: bool) {
        self.state.tick(now);
        let duration = if reduced_motion {
            Duration::ZERO
        } else {
            self.state.transition()
        };
        self.tween.retarget(self.state.position(), duration, now);
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        tokens: &ThemeTokens,
        reduced_motion: bool,
    ) -> Option<ViewRequest> {
        let now = Instant::now();
        self.advance(now, reduced_motion);

        let mut request = None;
        egui::TopBottomPanel::top("practice_toolbar")
            .exact_height(TOOLBAR_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(tokens.toolbar_bg)
                    .stroke(Stroke::new(1.0, tokens.border))
                    .inner_margin(egui::Margin::symmetric(16.0, 0.0)),
            )
            .show(ctx, |ui| {
                request = self.toolbar(ui, tokens, now);
            });

        egui::SidePanel::right("performance_status")
            .exact_width(STATUS_PANEL_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(tokens.page_bg)
                    .stroke(Stroke::new(1.0, tokens.border))
                    .inner_margin(16.0),
            )
            .show(ctx, |ui| self.status_panel(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(tokens.page_bg).inner_margin(SHEET_PADDING))
            .show(ctx, |ui| self.sheet_pane(ui, tokens, now));

        self.schedule_repaint(ctx, now);
        request
    }

    fn toolbar(&mut self, ui: &mut Ui, tokens: &ThemeTokens, now: Instant) -> Option<ViewRequest> {
        let mut request = None;
        ui.columns(3, |cols| {
            cols[0].with_layout(Layout::left_to_right(Align::Center), |ui| {
                let tint = if self.state.is_mic_active() {
                    let time = ui.input(|i| i.time);
                    tokens.mic_active.linear_multiply(ui_theme::pulse_opacity(time))
                } else {
                    tokens.control_idle
                };
                if icon_button(ui, "mic", "Mic", 24.0, tint, "Toggle microphone").clicked() {
                    self.state.toggle_mic();
                }
            });
            cols[1].with_layout(Layout::top_down(Align::Center).with_main_align(Align::Center), |ui| {
                let icon = self.state.play_button_icon();
                let label = match icon {
                    TransportIcon::Play => "Play",
                    TransportIcon::Pause => "Pause",
                };
                if icon_button(ui, icon.icon_name(), label, 24.0, tokens.control_idle, icon.tooltip()).clicked() {
                    self.state.toggle_playback(now);
                }
            });
            cols[2].with_layout(Layout::right_to_left(Align::Center), |ui| {
                if icon_button(ui, "x", "Close", 20.0, tokens.control_idle, "Close practice").clicked() {
                    request = Some(ViewRequest::Close);
                }
                if icon_button(ui, "settings", "Settings", 20.0, tokens.control_idle, "Settings").clicked() {
                    request = Some(ViewRequest::OpenSettings);
                }
            });
        });
        request
    }

    fn status_panel(&self, ui: &mut Ui) {
        let status = self.state.status();
        let tone = self.state.status_tone();
        let (ink, fill) = ui_theme::badge_colors(tone.rgb, tone.background_alpha);
        egui::Frame::none()
            .fill(fill)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Performance").color(ink));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), Sense::hover());
                        ui.painter().circle_filled(dot.center(), 4.0, ink);
                    });
                });
            })
            .response
            .on_hover_text(format!("Performance: {}", status.label()));
    }

    fn sheet_pane(&self, ui: &mut Ui, tokens: &ThemeTokens, now: Instant) {
        let available = ui.available_rect_before_wrap();
        let painter = ui.painter_at(available);
        let sheet_rect = match self.sheet.texture(ui.ctx()) {
            Some((texture, size)) => {
                let rect = sheet::fit_rect(available, size);
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture, rect, uv, Color32::WHITE);
                rect
            }
            None => {
                sheet::draw_placeholder(&painter, available, tokens.text_primary);
                available
            }
        };
        ui.allocate_rect(available, Sense::hover());

        let position = self.tween.sample(now);
        let highlight = sheet::highlight_rect(sheet_rect, position.left, position.top);
        painter.rect_filled(highlight, 4.0, tokens.highlight_fill);
        painter.rect_stroke(highlight, 4.0, Stroke::new(2.0, tokens.highlight_stroke));
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if !self.tween.is_settled(now) || self.state.is_mic_active() {
            ctx.request_repaint();
        } else if let Some(wait) = self.state.next_wake(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Lucide icon button with hover animation, or a text button when the SVG is missing.
fn icon_button(
    ui: &mut Ui,
    icon: &'static str,
    fallback: &str,
    size: f32,
    tint: Color32,
    tooltip: &str,
) -> egui::Response {
    let Some(texture) = icons::icon_tex(ui.ctx(), icon) else {
        return ui
            .add(egui::Button::new(RichText::new(fallback).color(tint)).frame(false))
            .on_hover_text(tooltip);
    };
    let resp = ui
        .add(egui::ImageButton::new((texture, egui::vec2(size, size))).tint(tint).frame(false))
        .on_hover_text(tooltip);
    let pressed = resp.is_pointer_button_down_on();
    let scaled = size * icons::hover_scale(ui, resp.hovered(), pressed, icon, 1.08);
    let hover = icons::hover_tint(ui, tint, resp.hovered(), pressed, icon);
    let image_rect = Rect::from_center_size(resp.rect.center(), egui::vec2(scaled, scaled));
    ui.painter().image(
        texture,
        image_rect,
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        hover,
    );
    resp
}
