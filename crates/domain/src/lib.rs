pub mod error;
pub mod position;
pub mod settings;
pub mod status;

pub use crate::error::DomainError;
pub use crate::position::{HighlightPosition, NotePositions};
pub use crate::settings::{HighlightMode, PracticeSettings, ThemeChoice};
pub use crate::status::{PerformanceStatus, StatusTone};
