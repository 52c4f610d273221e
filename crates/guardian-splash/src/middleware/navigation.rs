//! NavigationMiddleware - turns the auth outcome into the one navigation command
//!
//! This middleware handles:
//! - Deciding the destination when the auth check settles
//! - Queueing `Navigate` so it runs after `is_loading = false` is published
//! - Calling the navigation sink exactly once, never after teardown

use super::{BoxFuture, Middleware};
use crate::{
    actions::Action,
    dispatcher::Dispatcher,
    navigation::{NavOptions, NavigationDecision, NavigationSink, Routes},
    state::{SplashPhase, SplashState},
};
use guardian_auth::AuthOutcome;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct NavigationMiddleware {
    sink: Arc<dyn NavigationSink>,
    routes: Routes,
    token: CancellationToken,
    /// Set once the sink has been called
    navigated: bool,
}

impl NavigationMiddleware {
    pub fn new(sink: Arc<dyn NavigationSink>, routes: Routes, token: CancellationToken) -> Self {
        Self {
            sink,
            routes,
            token,
            navigated: false,
        }
    }

    fn on_resolved(&self, outcome: &AuthOutcome, dispatcher: &Dispatcher) {
        match outcome {
            AuthOutcome::Failed(err) => {
                log::warn!("NavigationMiddleware: auth check failed, routing to login: {}", err)
            }
            _ => log::info!("NavigationMiddleware: auth check settled: {:?}", outcome),
        }

        dispatcher.dispatch(Action::Navigate(NavigationDecision::from_outcome(outcome)));
    }

    /// Returns false when the command was suppressed
    fn navigate(&mut self, decision: &NavigationDecision) -> bool {
        if self.navigated {
            log::debug!("NavigationMiddleware: already navigated, ignoring {:?}", decision);
            return false;
        }
        if self.token.is_cancelled() {
            log::debug!("NavigationMiddleware: splash disposed, dropping {:?}", decision);
            return false;
        }

        let destination_id = self.routes.route_for(decision.destination);
        let options = NavOptions {
            clear_entry: self.routes.splash.clone(),
        };
        log::info!(
            "NavigationMiddleware: navigating to {} (clearing {})",
            destination_id,
            options.clear_entry
        );
        self.navigated = true;
        self.sink.navigate(destination_id, &options);
        true
    }
}

impl Middleware for NavigationMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a SplashState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match action {
                Action::AuthResolved(outcome) if state.phase == SplashPhase::Loading => {
                    self.on_resolved(outcome, dispatcher);
                    true
                }
                Action::Navigate(decision) => {
                    if state.phase != SplashPhase::Resolved {
                        log::debug!(
                            "NavigationMiddleware: ignoring {:?} in phase {:?}",
                            decision,
                            state.phase
                        );
                        return false;
                    }
                    self.navigate(decision)
                }
                _ => true,
            }
        })
    }
}
