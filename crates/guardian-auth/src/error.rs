//! Authentication check failure and outcome types

use std::time::Duration;
use thiserror::Error;

/// Any failure of the authentication provider.
///
/// This is the only error kind of the splash core. It is never surfaced to
/// the user; the controller routes to the login screen instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthCheckFailed {
    /// The provider could not reach its backend.
    #[error("Network error: {0}")]
    Network(String),

    /// The check did not finish within the configured timeout.
    #[error("Auth check timed out after {0:?}")]
    TimedOut(Duration),

    /// The provider answered with something it could not interpret.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The provider is not available at all.
    #[error("Auth provider unavailable: {0}")]
    Unavailable(String),
}

/// Settled result of one authentication check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Unauthenticated,
    Failed(AuthCheckFailed),
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated)
    }
}

impl From<Result<bool, AuthCheckFailed>> for AuthOutcome {
    fn from(result: Result<bool, AuthCheckFailed>) -> Self {
        match result {
            Ok(true) => AuthOutcome::Authenticated,
            Ok(false) => AuthOutcome::Unauthenticated,
            Err(err) => AuthOutcome::Failed(err),
        }
    }
}
