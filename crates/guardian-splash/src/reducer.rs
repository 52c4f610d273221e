use crate::actions::Action;
use crate::state::{SplashPhase, SplashState};

/// Reducer - pure function that produces new state from current state + action
///
/// Each transition only fires from its source phase, so replayed or late
/// actions leave the state untouched.
pub fn reduce(mut state: SplashState, action: &Action) -> SplashState {
    match action {
        Action::Start if state.phase == SplashPhase::Initializing => {
            state.phase = SplashPhase::Loading;
            state.is_loading = true;
        }
        Action::AuthResolved(_) if state.phase == SplashPhase::Loading => {
            state.phase = SplashPhase::Resolved;
            state.is_loading = false;
        }
        Action::Navigate(_) if state.phase == SplashPhase::Resolved => {
            state.phase = SplashPhase::Navigated;
        }
        Action::Dispose if !state.phase.is_terminal() => {
            state.phase = SplashPhase::Disposed;
        }
        _ => {
            // Out-of-order action - no state change
        }
    }

    state
}
