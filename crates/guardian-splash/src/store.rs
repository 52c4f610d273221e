use crate::{
    actions::Action,
    dispatcher::Dispatcher,
    middleware::Middleware,
    reducer::reduce,
    state::SplashState,
};
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

/// Redux-style Store that owns the splash state
///
/// - Actions flow through the middleware chain, then the pure reducer
/// - Every state change is published on a watch channel before the next
///   action is taken from the queue
/// - The store is the only writer of `SplashState`
pub struct Store {
    state: SplashState,
    middleware: Vec<Box<dyn Middleware>>,
    state_tx: watch::Sender<SplashState>,
}

impl Store {
    pub fn new(initial_state: SplashState, state_tx: watch::Sender<SplashState>) -> Self {
        state_tx.send_replace(initial_state);
        Self {
            state: initial_state,
            middleware: Vec::new(),
            state_tx,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    pub fn state(&self) -> &SplashState {
        &self.state
    }

    /// Dispatch an action through middleware chain, then reducer
    pub async fn dispatch(&mut self, action: Action, dispatcher: &Dispatcher) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, dispatcher).await {
                return;
            }
        }
        self.apply(&action);
    }

    fn apply(&mut self, action: &Action) {
        let new_state = reduce(self.state, action);
        if new_state != self.state {
            self.state = new_state;
            self.state_tx.send_replace(new_state);
        }
    }

    /// Process queued actions until the token is cancelled
    ///
    /// Cancellation is checked before every action, so nothing queued after
    /// teardown reaches middleware or reducer.
    ///
    /// Teardown publishes exactly one transition: `Dispose` is reduced without
    /// running middleware, which moves a non-terminal phase to `Disposed` and
    /// leaves `is_loading` as it was. A store that already navigated stays in
    /// `Navigated` and publishes nothing. Observers waiting on the watch
    /// channel use `Disposed` to tell teardown apart from a splash that is
    /// still loading.
    pub async fn run(
        mut self,
        mut rx: mpsc::UnboundedReceiver<Action>,
        dispatcher: Dispatcher,
        token: CancellationToken,
    ) {
        log::debug!("Store loop started");

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    self.apply(&Action::Dispose);
                    break;
                }
                action = rx.recv() => match action {
                    Some(action) => self.dispatch(action, &dispatcher).await,
                    None => break,
                },
            }
        }

        log::debug!("Store loop stopped in phase {:?}", self.state.phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::BoxFuture;
    use crate::state::SplashPhase;
    use crate::navigation::NavigationDecision;
    use guardian_auth::AuthOutcome;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct BlockingMiddleware {
        seen: Arc<AtomicUsize>,
    }

    impl Middleware for BlockingMiddleware {
        fn handle<'a>(
            &'a mut self,
            _action: &'a Action,
            _state: &'a SplashState,
            _dispatcher: &'a Dispatcher,
        ) -> BoxFuture<'a, bool> {
            Box::pin(async move {
                self.seen.fetch_add(1, Ordering::SeqCst);
                false
            })
        }
    }

    fn store() -> (Store, watch::Receiver<SplashState>, Dispatcher) {
        let (state_tx, state_rx) = watch::channel(SplashState::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        (
            Store::new(SplashState::default(), state_tx),
            state_rx,
            Dispatcher::new(tx),
        )
    }

    #[tokio::test]
    async fn test_dispatch_publishes_changes() {
        let (mut store, mut state_rx, dispatcher) = store();
        state_rx.mark_unchanged();

        store.dispatch(Action::Start, &dispatcher).await;

        assert!(state_rx.has_changed().unwrap());
        assert_eq!(state_rx.borrow_and_update().phase, SplashPhase::Loading);
    }

    #[tokio::test]
    async fn test_no_op_actions_do_not_notify() {
        let (mut store, mut state_rx, dispatcher) = store();
        store.dispatch(Action::Start, &dispatcher).await;
        state_rx.mark_unchanged();

        store.dispatch(Action::Start, &dispatcher).await;

        assert!(!state_rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_blocking_middleware_skips_reducer() {
        let (mut store, _state_rx, dispatcher) = store();
        let seen = Arc::new(AtomicUsize::new(0));
        store.add_middleware(BlockingMiddleware { seen: seen.clone() });

        store.dispatch(Action::Start, &dispatcher).await;

        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(store.state().phase, SplashPhase::Initializing);
    }

    #[tokio::test]
    async fn test_run_stops_on_cancel() {
        let (state_tx, state_rx) = watch::channel(SplashState::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let token = CancellationToken::new();
        let store = Store::new(SplashState::default(), state_tx);

        dispatcher.dispatch(Action::Start);
        let handle = tokio::spawn(store.run(rx, dispatcher.clone(), token.clone()));

        let mut watcher = state_rx.clone();
        watcher
            .wait_for(|s| s.phase == SplashPhase::Loading)
            .await
            .unwrap();

        token.cancel();
        handle.await.unwrap();

        // Resolution arriving after teardown is never processed
        dispatcher.dispatch(Action::AuthResolved(AuthOutcome::Authenticated));
        let state = *state_rx.borrow();
        assert_eq!(state.phase, SplashPhase::Disposed);
        assert!(state.is_loading);
    }

    #[tokio::test]
    async fn test_cancel_after_navigation_keeps_navigated() {
        let (state_tx, state_rx) = watch::channel(SplashState::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let token = CancellationToken::new();
        let store = Store::new(SplashState::default(), state_tx);

        let outcome = AuthOutcome::Unauthenticated;
        dispatcher.dispatch(Action::Start);
        dispatcher.dispatch(Action::AuthResolved(outcome.clone()));
        dispatcher.dispatch(Action::Navigate(NavigationDecision::from_outcome(&outcome)));
        let handle = tokio::spawn(store.run(rx, dispatcher.clone(), token.clone()));

        let mut watcher = state_rx.clone();
        let navigated = *watcher
            .wait_for(|s| s.phase == SplashPhase::Navigated)
            .await
            .unwrap();

        token.cancel();
        handle.await.unwrap();

        // Teardown of a finished splash is not a transition
        assert_eq!(*state_rx.borrow(), navigated);
        assert!(!navigated.is_loading);
    }
}
