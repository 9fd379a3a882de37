use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;
use staffline_domain::{PracticeSettings, ThemeChoice};
use staffline_ui::theme::{self as ui_theme, ThemeMode};
use tracing::info;

use crate::cli::RunOverrides;
use crate::practice::{PracticeView, ViewRequest};
use crate::settings::{SettingsChange, SettingsPane};

pub struct DesktopApp {
    view: PracticeView,
    settings: SettingsPane,
    /// Command-line flags; each one wins until the user edits the matching
    /// setting in the Settings window.
    overrides: RunOverrides,
}

impl DesktopApp {
    pub fn new(persisted: PracticeSettings, overrides: RunOverrides) -> Self {
        let effective = overrides.effective(&persisted);
        let sheet = effective.sheet_path.as_ref().map(PathBuf::from);
        Self {
            view: PracticeView::mount(effective.highlight_mode, sheet.as_deref()),
            settings: SettingsPane::new(persisted),
            overrides,
        }
    }

    fn effective(&self) -> PracticeSettings {
        self.overrides.effective(&self.settings.settings)
    }

    fn sheet_path(&self) -> Option<PathBuf> {
        self.effective().sheet_path.map(PathBuf::from)
    }

    fn theme_mode(&self) -> ThemeMode {
        match self.effective().theme {
            ThemeChoice::Dark => ThemeMode::Dark,
            ThemeChoice::Light => ThemeMode::Light,
        }
    }

    /// Replace the view with a fresh mount; the old one is torn down first.
    fn remount(&mut self) {
        self.view.teardown();
        let mode = self.effective().highlight_mode;
        info!(?mode, "remounting practice view");
        let sheet = self.sheet_path();
        self.view = PracticeView::mount(mode, sheet.as_deref());
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mode = self.theme_mode();
        ui_theme::apply(ctx, mode);
        let tokens = ui_theme::theme(mode).tokens;

        let reduced_motion = self.effective().reduced_motion;
        match self.view.show(ctx, &tokens, reduced_motion) {
            Some(ViewRequest::OpenSettings) => self.settings.open(),
            Some(ViewRequest::Close) => {
                info!("close requested");
                self.view.teardown();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            None => {}
        }

        match self.settings.window(ctx) {
            Some(SettingsChange::Remount) => {
                self.overrides.mode = None;
                self.remount();
            }
            Some(SettingsChange::Sheet) => {
                self.overrides.sheet = None;
                let sheet = self.sheet_path();
                self.view.reload_sheet(sheet.as_deref());
            }
            Some(SettingsChange::Theme) => self.overrides.theme = None,
            Some(SettingsChange::Motion) => self.overrides.reduced_motion = false,
            None => {}
        }
        self.settings.tick_autosave(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffline_domain::HighlightMode;

    #[test]
    fn overrides_stay_out_of_the_settings_pane() {
        let overrides = RunOverrides {
            mode: Some(HighlightMode::Sweep),
            theme: Some(ThemeChoice::Dark),
            reduced_motion: true,
            ..Default::default()
        };
        let app = DesktopApp::new(PracticeSettings::default(), overrides);
        assert_eq!(app.settings.settings, PracticeSettings::default());
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert_eq!(app.effective().highlight_mode, HighlightMode::Sweep);
        assert!(app.effective().reduced_motion);
    }
}
