//! Splash screen animation timeline
//!
//! Produces the progress values the presentation layer reads every frame.
//! Nothing in here knows about authentication: the only business input is
//! whether the splash is still loading.
//!
//! All functions take the elapsed time since the timeline origin explicitly,
//! so sampling is deterministic and the caller owns the clock.
//!
//! ```text
//!   is_loading ──► Tween (logo scale)   1.0 ──1000ms──► 0.8
//!              └─► Tween (text reveal)  1.0 ──1000ms──► 0.0
//!   (always)   ──► Pulse (dot alpha)    0.0 ◄─500ms─► 1.0 ◄─500ms─► 0.0 ...
//! ```

pub mod easing;
pub mod pulse;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use pulse::{Pulse, PulseFrames};
pub use timeline::{AnimationTimeline, SplashFrame};
pub use tween::Tween;
