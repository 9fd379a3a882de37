use std::time::{Duration, Instant};

use staffline_domain::{HighlightMode, HighlightPosition};

use crate::stepped::SteppedDriver;
use crate::sweep::SweepDriver;

/// Owns the highlight animation schedule.
///
/// All methods take the current instant explicitly so the frame loop decides
/// what "now" is. A stopped driver holds no schedule and `tick` never moves it.
pub trait HighlightDriver {
    fn start(&mut self, now: Instant);
    fn stop(&mut self, now: Instant);
    /// Advance to `now`. Returns `true` when the position changed.
    fn tick(&mut self, now: Instant) -> bool;
    fn position(&self) -> HighlightPosition;
    /// Easing applied when the renderer moves to a new position.
    fn transition(&self) -> Duration;
    /// How long the frame loop may sleep before the next `tick` is due.
    fn next_wake(&self, now: Instant) -> Option<Duration>;
    fn is_running(&self) -> bool;
}

pub fn driver_for(mode: HighlightMode) -> Box<dyn HighlightDriver> {
    match mode {
        HighlightMode::Stepped => Box::new(SteppedDriver::default()),
        HighlightMode::Sweep => Box::new(SweepDriver::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drivers_start_idle() {
        for mode in [HighlightMode::Stepped, HighlightMode::Sweep] {
            let driver = driver_for(mode);
            assert!(!driver.is_running());
            assert!(driver.next_wake(Instant::now()).is_none());
        }
    }
}
