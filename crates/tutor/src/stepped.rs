use std::time::{Duration, Instant};

use staffline_domain::{DomainError, HighlightPosition, NotePositions};
use tracing::debug;

use crate::driver::HighlightDriver;

pub const STEP_PERIOD: Duration = Duration::from_millis(300);
/// Quick ease so jumps between notes stay readable.
pub const STEP_TRANSITION: Duration = Duration::from_millis(100);

/// Repeating deadline. Dropping it is the cancellation.
#[derive(Clone, Copy, Debug)]
struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Number of periods that elapsed up to `now`. Moves the deadline past `now`.
    fn fire(&mut self, now: Instant) -> u128 {
        if now < self.next_due {
            return 0;
        }
        let period = self.period.as_nanos();
        let fired = (now - self.next_due).as_nanos() / period + 1;
        let advance = u64::try_from(period * fired).unwrap_or(u64::MAX);
        self.next_due += Duration::from_nanos(advance);
        fired
    }
}

/// Jumps through a fixed list of note positions, one step per period.
#[derive(Debug)]
pub struct SteppedDriver {
    notes: NotePositions,
    index: usize,
    period: Duration,
    timer: Option<Interval>,
}

impl SteppedDriver {
    pub fn new(notes: NotePositions, period: Duration) -> Result<Self, DomainError> {
        if period.is_zero() {
            return Err(DomainError::validation("step period must be non-zero"));
        }
        Ok(Self {
            notes,
            index: 0,
            period,
            timer: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for SteppedDriver {
    fn default() -> Self {
        Self {
            notes: NotePositions::default(),
            index: 0,
            period: STEP_PERIOD,
            timer: None,
        }
    }
}

impl HighlightDriver for SteppedDriver {
    fn start(&mut self, now: Instant) {
        if self.timer.is_none() {
            debug!(index = self.index, period_ms = self.period.as_millis() as u64, "stepped highlight started");
            self.timer = Some(Interval::new(self.period, now));
        }
    }

    fn stop(&mut self, _now: Instant) {
        if self.timer.take().is_some() {
            debug!(index = self.index, "stepped highlight stopped");
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        let fired = timer.fire(now);
        if fired == 0 {
            return false;
        }
        let len = self.notes.len();
        let steps = (fired % len as u128) as usize;
        self.index = (self.index + steps) % len;
        // A whole number of loops lands on the same note but still counts as movement.
        true
    }

    fn position(&self) -> HighlightPosition {
        self.notes.get(self.index)
    }

    fn transition(&self) -> Duration {
        STEP_TRANSITION
    }

    fn next_wake(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|timer| timer.next_due.saturating_duration_since(now))
    }

    fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}
