use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Which animation contract drives the highlight box.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Jump between predefined note positions on a fixed interval.
    #[default]
    Stepped,
    /// Continuous left-to-right sweep derived from elapsed time.
    Sweep,
}

impl HighlightMode {
    pub fn label(self) -> &'static str {
        match self {
            HighlightMode::Stepped => "Step through notes",
            HighlightMode::Sweep => "Continuous sweep",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    #[default]
    Light,
}

/// User preferences persisted between runs. Fields missing from older files
/// fall back to their defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PracticeSettings {
    pub highlight_mode: HighlightMode,
    pub theme: ThemeChoice,
    /// Skip easing between highlight positions.
    pub reduced_motion: bool,
    /// Overrides the bundled sheet-music image.
    pub sheet_path: Option<String>,
}

impl PracticeSettings {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(path) = &self.sheet_path {
            if path.trim().is_empty() {
                return Err(DomainError::validation("sheet path cannot be blank"));
            }
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = PracticeSettings::from_json(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.highlight_mode, HighlightMode::Stepped);
        assert!(!settings.reduced_motion);
        assert!(settings.sheet_path.is_none());
    }

    #[test]
    fn blank_sheet_path_is_rejected() {
        let err = PracticeSettings::from_json(r#"{ "sheet_path": "  " }"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn malformed_json_reports_serialization_error() {
        let err = PracticeSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DomainError::Serialization(_)));
    }

    #[test]
    fn writes_lowercase_modes() {
        let settings = PracticeSettings {
            highlight_mode: HighlightMode::Sweep,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"highlight_mode\": \"sweep\""));
    }
}
