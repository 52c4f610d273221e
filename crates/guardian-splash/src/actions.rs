//! Splash actions
//!
//! Everything that can happen to the splash screen, in the order it normally
//! happens.

use crate::navigation::NavigationDecision;
use guardian_auth::AuthOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Controller started, the auth check and frame clock are running
    Start,
    /// The auth check settled (successfully or not)
    AuthResolved(AuthOutcome),
    /// Send the app to its destination
    Navigate(NavigationDecision),
    /// The hosting screen was torn down
    Dispose,
}
