use std::time::{Duration, Instant};

use staffline_domain::{HighlightMode, HighlightPosition, PerformanceStatus, StatusTone};
use tracing::{debug, info};

use crate::driver::{driver_for, HighlightDriver};

/// Icon shown on the transport button; always the action a click performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportIcon {
    Play,
    Pause,
}

impl TransportIcon {
    pub fn icon_name(self) -> &'static str {
        match self {
            TransportIcon::Play => "play",
            TransportIcon::Pause => "pause",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            TransportIcon::Play => "Start practice",
            TransportIcon::Pause => "Pause practice",
        }
    }
}

/// State behind the practice view. Lives exactly as long as the mounted view;
/// a fresh instance is a fresh mount.
pub struct PracticeViewState {
    mic_active: bool,
    playing: bool,
    status: PerformanceStatus,
    driver: Box<dyn HighlightDriver>,
    mounted: bool,
}

impl PracticeViewState {
    pub fn new(driver: Box<dyn HighlightDriver>) -> Self {
        Self {
            mic_active: false,
            playing: false,
            status: PerformanceStatus::default(),
            driver,
            mounted: true,
        }
    }

    pub fn with_mode(mode: HighlightMode) -> Self {
        info!(?mode, "mounting practice view");
        Self::new(driver_for(mode))
    }

    pub fn is_mic_active(&self) -> bool {
        self.mic_active
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn toggle_mic(&mut self) {
        if !self.mounted {
            return;
        }
        self.mic_active = !self.mic_active;
        debug!(active = self.mic_active, "microphone toggled");
    }

    pub fn toggle_playback(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.playing = !self.playing;
        // The schedule is settled before returning so the next frame sees it.
        if self.playing {
            self.driver.start(now);
        } else {
            self.driver.stop(now);
        }
    }

    pub fn play_button_icon(&self) -> TransportIcon {
        if self.playing {
            TransportIcon::Pause
        } else {
            TransportIcon::Play
        }
    }

    pub fn status(&self) -> PerformanceStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PerformanceStatus) {
        if self.mounted {
            self.status = status;
        }
    }

    pub fn status_tone(&self) -> StatusTone {
        self.status.tone()
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted || !self.playing {
            return false;
        }
        self.driver.tick(now)
    }

    pub fn position(&self) -> HighlightPosition {
        self.driver.position()
    }

    pub fn transition(&self) -> Duration {
        self.driver.transition()
    }

    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        if !self.mounted {
            return None;
        }
        self.driver.next_wake(now)
    }

    /// Unmount: cancel the animation schedule and freeze every field.
    pub fn teardown(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.driver.stop(now);
        self.mounted = false;
        info!(was_playing = self.playing, "practice view torn down");
    }
}

impl Drop for PracticeViewState {
    fn drop(&mut self) {
        self.teardown(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepped::SteppedDriver;
    use staffline_domain::NotePositions;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn stepped() -> PracticeViewState {
        PracticeViewState::new(Box::new(SteppedDriver::default()))
    }

    #[test]
    fn mounts_idle() {
        let view = stepped();
        assert!(!view.is_mic_active());
        assert!(!view.is_playing());
        assert_eq!(view.status(), PerformanceStatus::Average);
        assert_eq!(view.position(), NotePositions::default().get(0));
    }

    #[test]
    fn mic_toggles_once_per_call() {
        let mut view = stepped();
        view.toggle_mic();
        assert!(view.is_mic_active());
        view.toggle_mic();
        assert!(!view.is_mic_active());
    }

    #[test]
    fn transport_icon_is_inverse_action() {
        let t0 = Instant::now();
        let mut view = stepped();
        assert_eq!(view.play_button_icon(), TransportIcon::Play);
        view.toggle_playback(t0);
        assert!(view.is_playing());
        assert_eq!(view.play_button_icon(), TransportIcon::Pause);
        assert_eq!(view.play_button_icon().tooltip(), "Pause practice");
        view.toggle_playback(t0 + ms(10));
        assert!(!view.is_playing());
        assert_eq!(view.play_button_icon(), TransportIcon::Play);
    }

    #[test]
    fn tick_only_moves_while_playing() {
        let t0 = Instant::now();
        let mut view = stepped();
        assert!(!view.tick(t0 + ms(900)));
        view.toggle_playback(t0);
        assert!(view.tick(t0 + ms(300)));
        assert_eq!(view.position(), NotePositions::default().get(1));
        view.toggle_playback(t0 + ms(400));
        assert!(!view.tick(t0 + ms(3_000)));
        assert_eq!(view.position(), NotePositions::default().get(1));
        assert!(view.next_wake(t0 + ms(3_000)).is_none());
    }

    #[test]
    fn status_tone_follows_status() {
        let mut view = stepped();
        for status in PerformanceStatus::ALL {
            view.set_status(status);
            assert_eq!(view.status_tone(), status.tone());
        }
    }

    #[test]
    fn teardown_while_playing_stops_all_updates() {
        let t0 = Instant::now();
        let mut view = PracticeViewState::with_mode(HighlightMode::Sweep);
        view.toggle_playback(t0);
        view.tick(t0 + ms(150));
        view.teardown(t0 + ms(200));
        let frozen = view.position();
        assert!(!view.is_mounted());
        assert!(!view.tick(t0 + ms(5_000)));
        view.toggle_playback(t0 + ms(5_100));
        view.toggle_mic();
        view.set_status(PerformanceStatus::Good);
        assert_eq!(view.position(), frozen);
        assert!(!view.is_mic_active());
        assert_eq!(view.status(), PerformanceStatus::Average);
        assert!(view.next_wake(t0 + ms(5_200)).is_none());
        // Second teardown is a no-op.
        view.teardown(t0 + ms(6_000));
    }

    #[test]
    fn dropping_a_playing_view_does_not_panic() {
        let mut view = stepped();
        view.toggle_playback(Instant::now());
        drop(view);
    }
}
