use std::time::{Duration, Instant};

use staffline_domain::HighlightPosition;

/// Cubic ease-out on `0..=1`.
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Eased move between two highlight positions.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: HighlightPosition,
    to: HighlightPosition,
    started: Instant,
    duration: Duration,
}

impl Tween {
    pub fn settled(at: HighlightPosition, now: Instant) -> Self {
        Self {
            from: at,
            to: at,
            started: now,
            duration: Duration::ZERO,
        }
    }

    /// Start easing from wherever the box currently is towards `target`.
    pub fn retarget(&mut self, target: HighlightPosition, duration: Duration, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started = now;
        self.duration = duration;
    }

    pub fn sample(&self, now: Instant) -> HighlightPosition {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, ease_out(t))
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    pub fn target(&self) -> HighlightPosition {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pos(left: f32, top: f32) -> HighlightPosition {
        HighlightPosition::new(left, top).unwrap()
    }

    #[test]
    fn ease_out_endpoints() {
        assert_relative_eq!(ease_out(0.0), 0.0);
        assert_relative_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
        assert_relative_eq!(ease_out(3.0), 1.0);
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let t0 = Instant::now();
        let mut tween = Tween::settled(pos(10.0, 28.0), t0);
        tween.retarget(pos(20.0, 26.0), Duration::from_millis(100), t0);
        let mid = tween.sample(t0 + Duration::from_millis(50));
        assert!(mid.left > 10.0 && mid.left < 20.0);
        assert!(!tween.is_settled(t0 + Duration::from_millis(50)));
        assert_eq!(tween.sample(t0 + Duration::from_millis(100)), pos(20.0, 26.0));
        assert!(tween.is_settled(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn zero_duration_snaps() {
        let t0 = Instant::now();
        let mut tween = Tween::settled(pos(10.0, 26.0), t0);
        tween.retarget(pos(42.0, 26.0), Duration::ZERO, t0);
        assert_eq!(tween.sample(t0), pos(42.0, 26.0));
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_sample() {
        let t0 = Instant::now();
        let mut tween = Tween::settled(pos(10.0, 28.0), t0);
        tween.retarget(pos(50.0, 28.0), Duration::from_millis(300), t0);
        let t1 = t0 + Duration::from_millis(150);
        let current = tween.sample(t1);
        tween.retarget(pos(60.0, 28.0), Duration::from_millis(300), t1);
        assert_eq!(tween.sample(t1), current);
        assert_eq!(tween.target(), pos(60.0, 28.0));
    }
}
