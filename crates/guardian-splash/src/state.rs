//! Splash Screen State

/// Lifecycle phase of one splash controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Initializing,
    /// Waiting for the auth check
    Loading,
    /// Auth check settled, navigation pending
    Resolved,
    /// Navigation issued
    Navigated,
    /// Torn down before navigating
    Disposed,
}

impl SplashPhase {
    /// No transition leaves a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, SplashPhase::Navigated | SplashPhase::Disposed)
    }
}

/// State observed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashState {
    /// True until the auth check settles. Flips to false exactly once.
    pub is_loading: bool,
    pub phase: SplashPhase,
}

impl Default for SplashState {
    fn default() -> Self {
        Self {
            is_loading: true,
            phase: SplashPhase::Initializing,
        }
    }
}
