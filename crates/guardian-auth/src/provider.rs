//! Authentication provider trait and fixed-outcome implementations

use crate::error::AuthCheckFailed;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Answers whether the returning user has a valid session.
///
/// Implementations must be `Send + Sync` so the check can run on a spawned
/// task while the splash keeps animating.
///
/// # Example
///
/// ```rust,ignore
/// use guardian_auth::AuthProvider;
///
/// async fn route(provider: &dyn AuthProvider) -> &'static str {
///     match provider.check_auth_status().await {
///         Ok(true) => "home",
///         _ => "login",
///     }
/// }
/// ```
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Check the stored session
    ///
    /// # Returns
    ///
    /// `Ok(true)` when a valid session exists, `Ok(false)` when it does not,
    /// or an error if the provider could not decide.
    async fn check_auth_status(&self) -> Result<bool, AuthCheckFailed>;
}

#[async_trait]
impl<P: AuthProvider + ?Sized> AuthProvider for Arc<P> {
    async fn check_auth_status(&self) -> Result<bool, AuthCheckFailed> {
        (**self).check_auth_status().await
    }
}

/// Provider with a fixed answer, optionally delivered after a delay.
///
/// Used by the demo binary and in tests. Counts how often it was asked.
#[derive(Debug)]
pub struct StaticAuthProvider {
    result: Result<bool, AuthCheckFailed>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticAuthProvider {
    pub fn authenticated() -> Self {
        Self::with_result(Ok(true))
    }

    pub fn unauthenticated() -> Self {
        Self::with_result(Ok(false))
    }

    pub fn failing(err: AuthCheckFailed) -> Self {
        Self::with_result(Err(err))
    }

    pub fn with_result(result: Result<bool, AuthCheckFailed>) -> Self {
        Self {
            result,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Deliver the answer only after `delay`
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of checks started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn check_auth_status(&self) -> Result<bool, AuthCheckFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}

/// Provider whose check never completes.
#[derive(Debug, Default)]
pub struct PendingAuthProvider;

#[async_trait]
impl AuthProvider for PendingAuthProvider {
    async fn check_auth_status(&self) -> Result<bool, AuthCheckFailed> {
        std::future::pending().await
    }
}
