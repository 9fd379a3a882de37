use serde::{Deserialize, Serialize};

/// Coarse quality indicator shown in the status panel.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceStatus {
    Good,
    #[default]
    Average,
    Poor,
}

/// Badge colouring for a status: `rgb` is used for the text and dot, the
/// background is the same colour at `background_alpha`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTone {
    pub rgb: [u8; 3],
    pub background_alpha: u8,
}

/// 10% of 255, rounded.
const BADGE_BACKGROUND_ALPHA: u8 = 26;

impl PerformanceStatus {
    pub const ALL: [PerformanceStatus; 3] = [Self::Good, Self::Average, Self::Poor];

    pub fn tone(self) -> StatusTone {
        let rgb = match self {
            PerformanceStatus::Good => [0x22, 0xC5, 0x5E],
            PerformanceStatus::Average => [0xF9, 0x73, 0x16],
            PerformanceStatus::Poor => [0xEA, 0x38, 0x4C],
        };
        StatusTone {
            rgb,
            background_alpha: BADGE_BACKGROUND_ALPHA,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceStatus::Good => "good",
            PerformanceStatus::Average => "average",
            PerformanceStatus::Poor => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_average() {
        assert_eq!(PerformanceStatus::default(), PerformanceStatus::Average);
    }

    #[test]
    fn tone_mapping_is_fixed() {
        assert_eq!(PerformanceStatus::Good.tone().rgb, [0x22, 0xC5, 0x5E]);
        assert_eq!(PerformanceStatus::Average.tone().rgb, [0xF9, 0x73, 0x16]);
        assert_eq!(PerformanceStatus::Poor.tone().rgb, [0xEA, 0x38, 0x4C]);
        for status in PerformanceStatus::ALL {
            assert_eq!(status.tone().background_alpha, 26);
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&PerformanceStatus::Poor).unwrap();
        assert_eq!(json, "\"poor\"");
    }
}
