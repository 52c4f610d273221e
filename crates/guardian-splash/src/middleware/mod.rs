//! Middleware system for the splash store
//!
//! Middleware sits between action dispatch and reducer execution, so side
//! effects (logging, navigation) stay out of the pure reducer.
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can:
//! - Inspect actions and state
//! - Dispatch new actions
//! - Perform side effects
//! - Block actions from reaching the reducer

use crate::{actions::Action, dispatcher::Dispatcher, state::SplashState};
use std::future::Future;
use std::pin::Pin;

mod logging;
mod navigation;

pub use logging::LoggingMiddleware;
pub use navigation::NavigationMiddleware;

/// BoxFuture type alias for async middleware handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Middleware trait - handles actions before they reach the reducer
pub trait Middleware: Send + Sync {
    /// Handle an action before it reaches the reducer
    ///
    /// # Parameters
    /// - `action`: The action being dispatched
    /// - `state`: Current splash state (read-only)
    /// - `dispatcher`: Can dispatch follow-up actions
    ///
    /// # Returns
    /// - `true`: Continue to next middleware/reducer
    /// - `false`: Block this action from continuing
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a SplashState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool>;
}
