use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use eframe::egui;
use staffline_domain::{HighlightMode, PracticeSettings, ThemeChoice};
use tracing::{debug, warn};

const AUTOSAVE_DELAY: Duration = Duration::from_millis(600);

pub fn settings_path() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("staffline");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("settings.json"))
}

pub fn load_from(path: &Path) -> anyhow::Result<PracticeSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read settings {}", path.display()))?;
    Ok(PracticeSettings::from_json(&text)?)
}

pub fn save_to(path: &Path, settings: &PracticeSettings) -> anyhow::Result<()> {
    settings.validate()?;
    std::fs::write(path, settings.to_json()?)
        .with_context(|| format!("write settings {}", path.display()))?;
    Ok(())
}

/// Persisted settings, or defaults when there is no usable file.
pub fn load_settings() -> PracticeSettings {
    let Some(path) = settings_path() else {
        return PracticeSettings::default();
    };
    if !path.exists() {
        return PracticeSettings::default();
    }
    match load_from(&path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(?err, "ignoring unreadable settings file");
            PracticeSettings::default()
        }
    }
}

fn save_settings(settings: &PracticeSettings) {
    let Some(path) = settings_path() else {
        return;
    };
    match save_to(&path, settings) {
        Ok(()) => debug!(path = %path.display(), "settings saved"),
        Err(err) => warn!(?err, "failed to save settings"),
    }
}

/// Debounce so a burst of edits writes the file once.
#[derive(Debug, Default)]
pub struct Autosave {
    due: Option<Instant>,
}

impl Autosave {
    pub fn mark(&mut self, now: Instant) {
        self.due = Some(now + AUTOSAVE_DELAY);
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// `true` once the delay has passed since the last edit; clears the mark.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsChange {
    /// Highlight mode changed; the view has to be rebuilt.
    Remount,
    Theme,
    Motion,
    /// A different sheet image was chosen.
    Sheet,
}

/// Settings window over the persisted preferences only; run-only flags live
/// in [`crate::cli::RunOverrides`].
pub struct SettingsPane {
    pub settings: PracticeSettings,
    open: bool,
    sheet_input: String,
    autosave: Autosave,
}

impl SettingsPane {
    pub fn new(settings: PracticeSettings) -> Self {
        Self {
            sheet_input: settings.sheet_path.clone().unwrap_or_default(),
            settings,
            open: false,
            autosave: Autosave::default(),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn window(&mut self, ctx: &egui::Context) -> Option<SettingsChange> {
        let mut change = None;
        let mut open = self.open;
        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.strong("Highlight");
                for mode in [HighlightMode::Stepped, HighlightMode::Sweep] {
                    if ui
                        .radio_value(&mut self.settings.highlight_mode, mode, mode.label())
                        .changed()
                    {
                        change = Some(SettingsChange::Remount);
                    }
                }
                ui.add_space(8.0);
                ui.strong("Appearance");
                ui.horizontal(|ui| {
                    for (theme, label) in [(ThemeChoice::Light, "Light"), (ThemeChoice::Dark, "Dark")] {
                        if ui.radio_value(&mut self.settings.theme, theme, label).changed() {
                            change = Some(SettingsChange::Theme);
                        }
                    }
                });
                if ui
                    .checkbox(&mut self.settings.reduced_motion, "Reduced motion")
                    .on_hover_text("Move the highlight without easing")
                    .changed()
                {
                    change = Some(SettingsChange::Motion);
                }
                ui.add_space(8.0);
                ui.strong("Sheet music");
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.sheet_input)
                        .on_hover_text("Image path; leave empty for the bundled sheet");
                    if ui.button("Apply").clicked() {
                        let trimmed = self.sheet_input.trim();
                        self.settings.sheet_path =
                            (!trimmed.is_empty()).then(|| trimmed.to_string());
                        change = Some(SettingsChange::Sheet);
                    }
                });
            });
        self.open = open;
        if change.is_some() {
            self.autosave.mark(Instant::now());
        }
        change
    }

    pub fn tick_autosave(&mut self, now: Instant) {
        if self.autosave.take_due(now) {
            save_settings(&self.settings);
        }
    }
}

impl Drop for SettingsPane {
    fn drop(&mut self) {
        // Flush an edit made inside the debounce window before exit.
        if self.autosave.is_pending() {
            save_settings(&self.settings);
        }
    }
}
