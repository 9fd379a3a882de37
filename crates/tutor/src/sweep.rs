use std::time::{Duration, Instant};

use staffline_domain::HighlightPosition;
use tracing::debug;

use crate::driver::HighlightDriver;

pub const SWEEP_PERIOD: Duration = Duration::from_millis(300);
/// Percent of the track covered per period.
pub const SWEEP_STEP_PCT: f32 = 10.0;
pub const SWEEP_START_PCT: f32 = 10.0;
pub const SWEEP_END_PCT: f32 = 90.0;
pub const SWEEP_TOP_PCT: f32 = 26.0;
/// Easing used for position changes while the sweep is paused.
pub const SWEEP_SETTLE: Duration = Duration::from_millis(300);

/// Horizontal position after `elapsed` of sweeping, always in `[10, 90)`.
pub fn sweep_left(elapsed: Duration) -> f32 {
    let span = (SWEEP_END_PCT - SWEEP_START_PCT) as f64;
    let periods = elapsed.as_nanos() as f64 / SWEEP_PERIOD.as_nanos() as f64;
    let offset = (periods * SWEEP_STEP_PCT as f64).rem_euclid(span);
    let left = (SWEEP_START_PCT as f64 + offset) as f32;
    // Narrowing to f32 can round up onto the end of the track, which is the wrap point.
    if left >= SWEEP_END_PCT {
        SWEEP_START_PCT
    } else {
        left
    }
}

/// Time into the sweep that corresponds to `left`.
fn elapsed_for(left: f32) -> Duration {
    let periods = ((left - SWEEP_START_PCT) / SWEEP_STEP_PCT).max(0.0);
    SWEEP_PERIOD.mul_f32(periods)
}

#[derive(Clone, Copy, Debug)]
struct Run {
    since: Instant,
    /// Sweep time already covered before `since`.
    carried: Duration,
}

/// Sweeps the highlight across the staff at a constant rate.
#[derive(Debug)]
pub struct SweepDriver {
    left: f32,
    run: Option<Run>,
}

impl SweepDriver {
    pub fn new() -> Self {
        Self {
            left: SWEEP_START_PCT,
            run: None,
        }
    }
}

impl Default for SweepDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightDriver for SweepDriver {
    fn start(&mut self, now: Instant) {
        if self.run.is_none() {
            debug!(left = self.left, "sweep highlight started");
            self.run = Some(Run {
                since: now,
                carried: elapsed_for(self.left),
            });
        }
    }

    fn stop(&mut self, now: Instant) {
        self.tick(now);
        if self.run.take().is_some() {
            debug!(left = self.left, "sweep highlight stopped");
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        let Some(run) = self.run else {
            return false;
        };
        let elapsed = run.carried + now.saturating_duration_since(run.since);
        let left = sweep_left(elapsed);
        let moved = left != self.left;
        self.left = left;
        moved
    }

    fn position(&self) -> HighlightPosition {
        HighlightPosition {
            left: self.left,
            top: SWEEP_TOP_PCT,
        }
    }

    fn transition(&self) -> Duration {
        if self.run.is_some() {
            Duration::ZERO
        } else {
            SWEEP_SETTLE
        }
    }

    fn next_wake(&self, _now: Instant) -> Option<Duration> {
        // Every frame while sweeping.
        self.run.map(|_| Duration::ZERO)
    }

    fn is_running(&self) -> bool {
        self.run.is_some()
    }
}
