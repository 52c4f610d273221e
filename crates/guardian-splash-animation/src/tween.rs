//! Target-driven tween
//!
//! A tween always animates toward its current target. Changing the target
//! starts a new run from wherever the value is right now, so an interrupted
//! animation never jumps. Setting the same target again does nothing.

use crate::easing::Easing;
use std::time::Duration;

const TARGET_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Create a tween resting at `initial`
    pub fn new(initial: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: initial,
            to: initial,
            started_at: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Retarget the tween at time `now`.
    ///
    /// Returns `true` when a new run was started.
    pub fn set_target(&mut self, target: f32, now: Duration) -> bool {
        if (target - self.to).abs() < TARGET_EPSILON {
            return false;
        }

        let current = self.value_at(now);
        log::trace!(
            "Tween: retarget {:.3} -> {:.3} (from {:.3})",
            self.to,
            target,
            current
        );
        self.from = current;
        self.to = target;
        self.started_at = now;
        true
    }

    /// Sample the tween at time `now`
    pub fn value_at(&self, now: Duration) -> f32 {
        let t = self.linear_progress(now);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.linear_progress(now) >= 1.0
    }

    fn linear_progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_rests_at_initial_value() {
        let tween = Tween::new(1.0, ms(1000), Easing::FastOutSlowIn);
        assert_eq!(tween.value_at(ms(0)), 1.0);
        assert_eq!(tween.value_at(ms(5000)), 1.0);
        assert!(tween.is_settled(ms(0)));
    }

    #[test]
    fn test_reaches_target_after_duration() {
        let mut tween = Tween::new(1.0, ms(1000), Easing::FastOutSlowIn);
        assert!(tween.set_target(0.8, ms(200)));

        assert_eq!(tween.value_at(ms(200)), 1.0);
        let halfway = tween.value_at(ms(700));
        assert!(halfway < 1.0 && halfway > 0.8);
        assert!(!tween.is_settled(ms(700)));

        assert!((tween.value_at(ms(1200)) - 0.8).abs() < 1e-6);
        assert!(tween.is_settled(ms(1200)));
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut tween = Tween::new(1.0, ms(1000), Easing::Linear);
        tween.set_target(0.0, ms(0));
        let before = tween.value_at(ms(500));

        assert!(!tween.set_target(0.0, ms(500)));
        assert_eq!(tween.value_at(ms(500)), before);
        assert_eq!(tween.value_at(ms(1000)), 0.0);
    }

    #[test]
    fn test_retarget_continues_from_current_value() {
        let mut tween = Tween::new(0.0, ms(1000), Easing::Linear);
        tween.set_target(1.0, ms(0));
        tween.set_target(0.0, ms(250));

        assert!((tween.value_at(ms(250)) - 0.25).abs() < 1e-6);
        assert!((tween.value_at(ms(1250))).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = Tween::new(1.0, Duration::ZERO, Easing::Linear);
        tween.set_target(0.8, ms(10));
        assert_eq!(tween.value_at(ms(10)), 0.8);
    }
}
