use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Where the highlight box sits over the sheet image, in percent of the pane.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct HighlightPosition {
    /// Horizontal offset from the left edge, 0..=100.
    pub left: f32,
    /// Vertical offset from the top edge, 0..=100.
    pub top: f32,
}

impl HighlightPosition {
    pub fn new(left: f32, top: f32) -> Result<Self, DomainError> {
        for (axis, value) in [("left", left), ("top", top)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(DomainError::OutOfRange { axis, value });
            }
        }
        Ok(Self { left, top })
    }

    /// Unchecked constructor for the built-in tables.
    pub(crate) const fn at(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Straight-line blend towards `other`; `t` is clamped to 0..=1.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            left: self.left + (other.left - self.left) * t,
            top: self.top + (other.top - self.top) * t,
        }
    }
}

const DEFAULT_NOTES: [HighlightPosition; 8] = [
    HighlightPosition::at(10.0, 28.0),
    HighlightPosition::at(20.0, 26.0),
    HighlightPosition::at(30.0, 28.0),
    HighlightPosition::at(40.0, 24.0),
    HighlightPosition::at(50.0, 26.0),
    HighlightPosition::at(60.0, 28.0),
    HighlightPosition::at(70.0, 26.0),
    HighlightPosition::at(80.0, 24.0),
];

/// Ordered note coordinates the stepped highlight loops through. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct NotePositions {
    positions: Vec<HighlightPosition>,
}

impl NotePositions {
    pub fn new(positions: Vec<HighlightPosition>) -> Result<Self, DomainError> {
        if positions.is_empty() {
            return Err(DomainError::validation(
                "note position sequence requires at least one entry",
            ));
        }
        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position at `index`, wrapping past the end of the sequence.
    pub fn get(&self, index: usize) -> HighlightPosition {
        self.positions[index % self.positions.len()]
    }
}

impl Default for NotePositions {
    fn default() -> Self {
        Self {
            positions: DEFAULT_NOTES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_validation() {
        assert!(HighlightPosition::new(10.0, 28.0).is_ok());
        assert!(HighlightPosition::new(0.0, 100.0).is_ok());
        assert_eq!(
            HighlightPosition::new(-1.0, 20.0),
            Err(DomainError::OutOfRange {
                axis: "left",
                value: -1.0
            })
        );
        assert!(HighlightPosition::new(50.0, 101.0).is_err());
        assert!(HighlightPosition::new(f32::NAN, 20.0).is_err());
    }

    #[test]
    fn default_sequence_has_eight_notes() {
        let notes = NotePositions::default();
        assert_eq!(notes.len(), 8);
        assert_eq!(notes.get(0), HighlightPosition::at(10.0, 28.0));
        assert_eq!(notes.get(3), HighlightPosition::at(40.0, 24.0));
        assert_eq!(notes.get(7), HighlightPosition::at(80.0, 24.0));
        assert_eq!(notes.get(8), notes.get(0));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(NotePositions::new(Vec::new()).is_err());
    }

    #[test]
    fn lerp_clamps_factor() {
        let a = HighlightPosition::at(10.0, 20.0);
        let b = HighlightPosition::at(30.0, 40.0);
        assert_eq!(a.lerp(b, 0.5), HighlightPosition::at(20.0, 30.0));
        assert_eq!(a.lerp(b, 2.0), b);
    }
}
