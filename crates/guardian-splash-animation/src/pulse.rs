//! Infinite reverse-repeating oscillation
//!
//! Starts at 0.0, eases up to 1.0 over one half-cycle, eases back down over
//! the next one, and repeats forever.

use crate::easing::Easing;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    half_cycle: Duration,
    origin: Duration,
    easing: Easing,
}

impl Pulse {
    pub fn new(half_cycle: Duration, easing: Easing) -> Self {
        Self {
            half_cycle,
            origin: Duration::ZERO,
            easing,
        }
    }

    /// Restart the oscillation from 0.0 at time `now`
    pub fn restart(&mut self, now: Duration) {
        self.origin = now;
    }

    /// Sample the oscillation at time `now`
    pub fn value_at(&self, now: Duration) -> f32 {
        if self.half_cycle.is_zero() {
            return 0.0;
        }

        let elapsed = now.saturating_sub(self.origin);
        let half = self.half_cycle.as_nanos();
        let leg = elapsed.as_nanos() / half;
        let within = (elapsed.as_nanos() % half) as f64 / half as f64;

        let eased = self.easing.apply(within as f32);
        if leg % 2 == 0 {
            eased
        } else {
            1.0 - eased
        }
    }

    /// Lazy, infinite sequence of samples taken every `step` from the origin
    pub fn frames(&self, step: Duration) -> PulseFrames {
        PulseFrames {
            pulse: self.clone(),
            step,
            now: self.origin,
        }
    }
}

/// Iterator returned by [`Pulse::frames`]. Never ends.
#[derive(Debug, Clone)]
pub struct PulseFrames {
    pulse: Pulse,
    step: Duration,
    now: Duration,
}

impl Iterator for PulseFrames {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let value = self.pulse.value_at(self.now);
        self.now += self.step;
        Some(value)
    }
}
