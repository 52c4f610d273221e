//! Splash screen lifecycle controller
//!
//! Runs the intro animation, performs the authentication check, and sends the
//! app to exactly one destination once the check settles.
//!
//! ```text
//! SplashController::start()
//!   ├─► frame clock   ── AnimationTimeline ──► frames()  (every tick)
//!   ├─► auth check    ── AuthProvider ──► Action::AuthResolved
//!   └─► store loop    ── Middleware chain → Reducer → subscribe()
//!                           └─ NavigationMiddleware ──► NavigationSink (once)
//! ```
//!
//! All three tasks share one cancellation scope; `dispose()` (or dropping the
//! controller) ends them together.

pub mod actions;
pub mod controller;
pub mod dispatcher;
pub mod middleware;
pub mod navigation;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::Action;
pub use controller::SplashController;
pub use navigation::{
    Destination, NavOptions, NavigationCall, NavigationDecision, NavigationSink,
    RecordingNavigationSink, Routes,
};
pub use state::{SplashPhase, SplashState};

pub use guardian_auth::{AuthCheckFailed, AuthOutcome, AuthProvider};
pub use guardian_splash_animation::SplashFrame;
