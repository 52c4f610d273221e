//! LoggingMiddleware - logs all actions for debugging

use super::{BoxFuture, Middleware};
use crate::{actions::Action, dispatcher::Dispatcher, state::SplashState};

pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a SplashState,
        _dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            log::debug!("Action: {:?} (phase {:?})", action, state.phase);
            true
        })
    }
}
