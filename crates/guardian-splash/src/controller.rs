//! SplashController - one splash screen visit from start to navigation
//!
//! The controller is single-use: create it when the splash screen mounts,
//! call `start()` once, and drop or `dispose()` it when the screen goes away.

use crate::{
    actions::Action,
    dispatcher::Dispatcher,
    middleware::{LoggingMiddleware, NavigationMiddleware},
    navigation::{NavigationSink, Routes},
    state::SplashState,
    store::Store,
};
use guardian_auth::{AuthCheckFailed, AuthOutcome, AuthProvider, TimeoutAuthProvider};
use guardian_splash_animation::{AnimationTimeline, SplashFrame};
use guardian_splash_config::SplashConfig;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Everything `start()` needs that only exists before the first start
struct Pending {
    store: Store,
    rx: mpsc::UnboundedReceiver<Action>,
}

pub struct SplashController {
    auth: Arc<dyn AuthProvider>,
    frame_interval: Duration,
    dispatcher: Dispatcher,
    token: CancellationToken,
    state_rx: watch::Receiver<SplashState>,
    frame_tx: Arc<watch::Sender<SplashFrame>>,
    timeline: Arc<Mutex<AnimationTimeline>>,
    origin: Instant,
    pending: Option<Pending>,
    tasks: Vec<JoinHandle<()>>,
}

impl SplashController {
    /// Build a controller in the `Initializing` phase. Nothing runs yet.
    ///
    /// When the config sets `auth_timeout_ms`, the provider is wrapped so a
    /// stalled check resolves as `AuthCheckFailed::TimedOut`.
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        sink: Arc<dyn NavigationSink>,
        config: &SplashConfig,
    ) -> Self {
        let auth: Arc<dyn AuthProvider> = match config.auth_timeout() {
            Some(timeout) => Arc::new(TimeoutAuthProvider::new(auth, timeout)),
            None => auth,
        };

        let token = CancellationToken::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SplashState::default());
        let (frame_tx, _) = watch::channel(SplashFrame::default());

        let mut store = Store::new(SplashState::default(), state_tx);
        store.add_middleware(LoggingMiddleware::new());
        store.add_middleware(NavigationMiddleware::new(
            sink,
            Routes::from_config(config),
            token.clone(),
        ));

        Self {
            auth,
            frame_interval: config.frame_interval(),
            dispatcher: Dispatcher::new(tx),
            token,
            state_rx,
            frame_tx: Arc::new(frame_tx),
            timeline: Arc::new(Mutex::new(AnimationTimeline::new())),
            origin: Instant::now(),
            pending: Some(Pending { store, rx }),
            tasks: Vec::new(),
        }
    }

    /// Enter `Loading`: spawn the store loop, the frame clock and the auth check.
    ///
    /// Must be called from within a tokio runtime. Calling it a second time,
    /// or after `dispose()`, does nothing.
    pub fn start(&mut self) {
        if self.token.is_cancelled() {
            log::warn!("SplashController: start after dispose ignored");
            return;
        }
        let Some(Pending { store, rx }) = self.pending.take() else {
            log::warn!("SplashController: already started, controllers are single-use");
            return;
        };

        log::info!("SplashController: starting");
        self.origin = Instant::now();

        // Queued before the auth task exists, so Start is always reduced first
        self.dispatcher.dispatch(Action::Start);

        self.tasks.push(tokio::spawn(store.run(
            rx,
            self.dispatcher.clone(),
            self.token.clone(),
        )));
        self.tasks.push(self.spawn_frame_clock());
        self.tasks.push(self.spawn_auth_check());
    }

    /// Cancel all pending work. No navigation and no state change (other
    /// than moving to `Disposed`) can happen afterwards.
    pub fn dispose(&self) {
        if !self.token.is_cancelled() {
            log::info!("SplashController: disposing");
            self.token.cancel();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until every spawned task has finished.
    ///
    /// Returns immediately if `start()` was never called.
    pub async fn join(&mut self) {
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                log::error!("SplashController: task failed: {}", e);
            }
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> SplashState {
        *self.state_rx.borrow()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SplashState> {
        self.state_rx.clone()
    }

    /// Receiver notified on every frame clock tick
    pub fn frames(&self) -> watch::Receiver<SplashFrame> {
        self.frame_tx.subscribe()
    }

    /// Sample the animation timeline right now
    pub fn frame(&self) -> SplashFrame {
        let is_loading = self.state_rx.borrow().is_loading;
        self.lock_timeline().frame(is_loading, self.origin.elapsed())
    }

    fn lock_timeline(&self) -> std::sync::MutexGuard<'_, AnimationTimeline> {
        self.timeline.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_frame_clock(&self) -> JoinHandle<()> {
        let token = self.token.clone();
        let state_rx = self.state_rx.clone();
        let frame_tx = Arc::clone(&self.frame_tx);
        let timeline = Arc::clone(&self.timeline);
        let origin = self.origin;
        let mut interval = tokio::time::interval(self.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        let is_loading = state_rx.borrow().is_loading;
                        let frame = timeline
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .frame(is_loading, origin.elapsed());
                        frame_tx.send_replace(frame);
                    }
                }
            }
            log::debug!("SplashController: frame clock stopped");
        })
    }

    fn spawn_auth_check(&self) -> JoinHandle<()> {
        let token = self.token.clone();
        let dispatcher = self.dispatcher.clone();
        let auth = Arc::clone(&self.auth);

        tokio::spawn(async move {
            // Run the provider on its own task so a panic inside it still
            // resolves the splash instead of stranding it
            let check = tokio::spawn(async move { auth.check_auth_status().await });
            let abort = check.abort_handle();

            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    abort.abort();
                    log::debug!("SplashController: auth check cancelled");
                    return;
                }
                joined = check => joined.unwrap_or_else(|e| {
                    Err(AuthCheckFailed::Unavailable(format!("auth check aborted: {}", e)))
                }),
            };

            if token.is_cancelled() {
                return;
            }
            dispatcher.dispatch(Action::AuthResolved(AuthOutcome::from(result)));
        })
    }
}

impl Drop for SplashController {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
