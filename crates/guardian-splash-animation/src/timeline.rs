//! The splash animation timeline
//!
//! Two one-shot channels (logo scale and text reveal) follow `is_loading`,
//! one channel (the loading-dot pulse) runs for as long as the timeline lives.

use crate::easing::Easing;
use crate::pulse::Pulse;
use crate::tween::Tween;
use std::time::Duration;

/// Duration of the exit animations once loading finishes
pub const EXIT_DURATION: Duration = Duration::from_millis(1000);

/// Duration of one leg of the loading-dot pulse
pub const PULSE_HALF_CYCLE: Duration = Duration::from_millis(500);

/// Logo scale while loading
pub const LOADING_SCALE: f32 = 1.0;

/// Logo scale the exit animation settles at
pub const RESTING_SCALE: f32 = 0.8;

const REVEAL_SHOWN: f32 = 1.0;
const REVEAL_HIDDEN: f32 = 0.0;

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashFrame {
    pub is_loading: bool,
    /// Scale of the logo badge
    pub logo_scale: f32,
    /// Scale of the title row and tagline
    pub text_reveal: f32,
    /// Alpha of the three loading dots
    pub dot_alpha: f32,
}

impl Default for SplashFrame {
    fn default() -> Self {
        Self {
            is_loading: true,
            logo_scale: LOADING_SCALE,
            text_reveal: REVEAL_SHOWN,
            dot_alpha: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationTimeline {
    logo_scale: Tween,
    text_reveal: Tween,
    pulse: Pulse,
}

impl Default for AnimationTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationTimeline {
    pub fn new() -> Self {
        Self {
            logo_scale: Tween::new(LOADING_SCALE, EXIT_DURATION, Easing::default()),
            text_reveal: Tween::new(REVEAL_SHOWN, EXIT_DURATION, Easing::default()),
            pulse: Pulse::new(PULSE_HALF_CYCLE, Easing::default()),
        }
    }

    /// Logo scale: 1.0 while loading, eases to 0.8 once loading ends
    pub fn derived_progress(&mut self, is_loading: bool, now: Duration) -> f32 {
        let target = if is_loading {
            LOADING_SCALE
        } else {
            RESTING_SCALE
        };
        self.logo_scale.set_target(target, now);
        self.logo_scale.value_at(now)
    }

    /// Text reveal: 1.0 while loading, eases to 0.0 once loading ends
    pub fn reveal_progress(&mut self, is_loading: bool, now: Duration) -> f32 {
        let target = if is_loading {
            REVEAL_SHOWN
        } else {
            REVEAL_HIDDEN
        };
        self.text_reveal.set_target(target, now);
        self.text_reveal.value_at(now)
    }

    pub fn pulse(&self, now: Duration) -> f32 {
        self.pulse.value_at(now)
    }

    /// Sample every channel at once
    pub fn frame(&mut self, is_loading: bool, now: Duration) -> SplashFrame {
        SplashFrame {
            is_loading,
            logo_scale: self.derived_progress(is_loading, now),
            text_reveal: self.reveal_progress(is_loading, now),
            dot_alpha: self.pulse(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_loading_holds_full_scale() {
        let mut timeline = AnimationTimeline::new();
        for t in [0, 100, 5000] {
            assert_eq!(timeline.derived_progress(true, ms(t)), 1.0);
            assert_eq!(timeline.reveal_progress(true, ms(t)), 1.0);
        }
    }

    #[test]
    fn test_exit_animation_settles_after_one_second() {
        let mut timeline = AnimationTimeline::new();
        timeline.frame(true, ms(0));

        let start = timeline.frame(false, ms(300));
        assert_eq!(start.logo_scale, 1.0);
        assert_eq!(start.text_reveal, 1.0);

        let mid = timeline.frame(false, ms(800));
        assert!(mid.logo_scale < 1.0 && mid.logo_scale > RESTING_SCALE);
        assert!(mid.text_reveal < 1.0 && mid.text_reveal > 0.0);

        let end = timeline.frame(false, ms(1300));
        assert!((end.logo_scale - RESTING_SCALE).abs() < 1e-6);
        assert!(end.text_reveal.abs() < 1e-6);
    }

    #[test]
    fn test_repeated_calls_do_not_restart() {
        let mut timeline = AnimationTimeline::new();
        timeline.derived_progress(false, ms(0));
        let at_half = timeline.derived_progress(false, ms(500));
        // Calling again with the same input keeps the original run
        assert_eq!(timeline.derived_progress(false, ms(500)), at_half);
        assert!((timeline.derived_progress(false, ms(1000)) - RESTING_SCALE).abs() < 1e-6);
    }

    #[test]
    fn test_pulse_ignores_loading_flag() {
        let mut loading = AnimationTimeline::new();
        let mut done = AnimationTimeline::new();
        for t in (0..3000).step_by(37) {
            assert_eq!(
                loading.frame(true, ms(t)).dot_alpha,
                done.frame(false, ms(t)).dot_alpha
            );
        }
    }

    #[test]
    fn test_default_frame_matches_loading_start() {
        let mut timeline = AnimationTimeline::new();
        assert_eq!(timeline.frame(true, ms(0)), SplashFrame::default());
    }
}
