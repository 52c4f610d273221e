//! Timeout decorator for authentication providers
//!
//! Wraps any `AuthProvider` and turns a check that takes too long into
//! `AuthCheckFailed::TimedOut`, so a stalled backend still ends on a usable
//! screen.

use crate::error::AuthCheckFailed;
use crate::provider::AuthProvider;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TimeoutAuthProvider<P> {
    inner: P,
    timeout: Duration,
}

impl<P: AuthProvider> TimeoutAuthProvider<P> {
    /// Create a new timeout decorator
    ///
    /// # Arguments
    ///
    /// * `inner` - The provider to delegate to
    /// * `timeout` - Upper bound for a single check
    pub fn new(inner: P, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<P: AuthProvider> AuthProvider for TimeoutAuthProvider<P> {
    async fn check_auth_status(&self) -> Result<bool, AuthCheckFailed> {
        match tokio::time::timeout(self.timeout, self.inner.check_auth_status()).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("Auth check exceeded {:?}", self.timeout);
                Err(AuthCheckFailed::TimedOut(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{PendingAuthProvider, StaticAuthProvider};

    #[tokio::test(start_paused = true)]
    async fn test_fast_check_passes_through() {
        let provider = TimeoutAuthProvider::new(
            StaticAuthProvider::authenticated().after(Duration::from_millis(10)),
            Duration::from_millis(100),
        );
        assert_eq!(provider.check_auth_status().await, Ok(true));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_check_times_out() {
        let provider = TimeoutAuthProvider::new(PendingAuthProvider, Duration::from_millis(100));
        assert_eq!(
            provider.check_auth_status().await,
            Err(AuthCheckFailed::TimedOut(Duration::from_millis(100)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_inner_failure_is_kept() {
        let provider = TimeoutAuthProvider::new(
            StaticAuthProvider::failing(AuthCheckFailed::Unavailable("no backend".into())),
            Duration::from_secs(1),
        );
        assert_eq!(
            provider.check_auth_status().await,
            Err(AuthCheckFailed::Unavailable("no backend".into()))
        );
    }
}
