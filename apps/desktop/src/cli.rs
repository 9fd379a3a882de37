use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use staffline_domain::{HighlightMode, PracticeSettings, ThemeChoice};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Stepped,
    Sweep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Practice along with a sheet of music", long_about = None)]
pub struct Cli {
    /// Sheet-music image to show instead of the bundled one
    #[arg(long)]
    pub sheet: Option<PathBuf>,
    /// How the highlight follows playback
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Colour theme for this run
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    /// Move the highlight without easing
    #[arg(long)]
    pub reduced_motion: bool,
}

/// Flags that apply to this run only. They are layered over the persisted
/// settings when read and never written back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOverrides {
    pub sheet: Option<PathBuf>,
    pub mode: Option<HighlightMode>,
    pub theme: Option<ThemeChoice>,
    pub reduced_motion: bool,
}

impl RunOverrides {
    pub fn effective(&self, persisted: &PracticeSettings) -> PracticeSettings {
        let mut settings = persisted.clone();
        if let Some(sheet) = &self.sheet {
            settings.sheet_path = Some(sheet.display().to_string());
        }
        if let Some(mode) = self.mode {
            settings.highlight_mode = mode;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.reduced_motion {
            settings.reduced_motion = true;
        }
        settings
    }
}

impl Cli {
    pub fn overrides(&self) -> RunOverrides {
        RunOverrides {
            sheet: self.sheet.clone(),
            mode: self.mode.map(|mode| match mode {
                ModeArg::Stepped => HighlightMode::Stepped,
                ModeArg::Sweep => HighlightMode::Sweep,
            }),
            theme: self.theme.map(|theme| match theme {
                ThemeArg::Dark => ThemeChoice::Dark,
                ThemeArg::Light => ThemeChoice::Light,
            }),
            reduced_motion: self.reduced_motion,
        }
    }
}
