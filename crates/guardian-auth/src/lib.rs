//! Authentication status providers
//!
//! The splash screen only needs one question answered: does the returning
//! user still have a valid session? This crate defines that capability as a
//! trait and ships the implementations the app composes at startup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               AuthProvider trait                 │
//! │  - check_auth_status() -> bool | AuthCheckFailed │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┼────────────────────┐
//!        ▼               ▼                    ▼
//! ┌──────────────┐ ┌──────────────────┐ ┌─────────────────────┐
//! │ SessionFile  │ │ StaticAuth /     │ │ TimeoutAuthProvider │
//! │ AuthProvider │ │ PendingAuth      │ │ (decorator)         │
//! └──────────────┘ └──────────────────┘ └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use guardian_auth::{AuthProvider, SessionFileAuthProvider, TimeoutAuthProvider};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let provider = TimeoutAuthProvider::new(
//!     SessionFileAuthProvider::new("/tmp/session.toml"),
//!     Duration::from_secs(5),
//! );
//! let signed_in = provider.check_auth_status().await.unwrap_or(false);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;
pub mod session;
pub mod timeout;

pub use error::{AuthCheckFailed, AuthOutcome};
pub use provider::{AuthProvider, PendingAuthProvider, StaticAuthProvider};
pub use session::{Session, SessionFileAuthProvider};
pub use timeout::TimeoutAuthProvider;
