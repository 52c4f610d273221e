//! Navigation sink and destination routing

use guardian_auth::AuthOutcome;
use guardian_splash_config::SplashConfig;
use std::sync::{Mutex, PoisonError};

/// Screen the splash hands over to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
}

/// Where to go after the auth check. Computed once, consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationDecision {
    pub destination: Destination,
}

impl NavigationDecision {
    /// Only a definitive `true` leads home; a failed check counts as signed out
    pub fn from_outcome(outcome: &AuthOutcome) -> Self {
        let destination = if outcome.is_authenticated() {
            Destination::Home
        } else {
            Destination::Login
        };
        Self { destination }
    }
}

/// Options passed along with a navigation command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOptions {
    /// History entry to remove (inclusive) so back cannot return to it
    pub clear_entry: String,
}

/// Route identifiers for the splash and both destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    pub splash: String,
    pub home: String,
    pub login: String,
}

impl Routes {
    pub fn from_config(config: &SplashConfig) -> Self {
        Self {
            splash: config.splash_route.clone(),
            home: config.home_route.clone(),
            login: config.login_route.clone(),
        }
    }

    pub fn route_for(&self, destination: Destination) -> &str {
        match destination {
            Destination::Home => &self.home,
            Destination::Login => &self.login,
        }
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::from_config(&SplashConfig::default())
    }
}

/// Receives the single navigation command of a splash controller
pub trait NavigationSink: Send + Sync {
    fn navigate(&self, destination_id: &str, options: &NavOptions);
}

/// One recorded `navigate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCall {
    pub destination_id: String,
    pub options: NavOptions,
}

/// Sink that remembers every call, for hosts that poll and for tests
#[derive(Debug, Default)]
pub struct RecordingNavigationSink {
    calls: Mutex<Vec<NavigationCall>>,
}

impl RecordingNavigationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<NavigationCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn calls_to(&self, destination_id: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.destination_id == destination_id)
            .count()
    }
}

impl NavigationSink for RecordingNavigationSink {
    fn navigate(&self, destination_id: &str, options: &NavOptions) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(NavigationCall {
                destination_id: destination_id.to_string(),
                options: options.clone(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_auth::AuthCheckFailed;

    #[test]
    fn test_decision_from_outcome() {
        assert_eq!(
            NavigationDecision::from_outcome(&AuthOutcome::Authenticated).destination,
            Destination::Home
        );
        assert_eq!(
            NavigationDecision::from_outcome(&AuthOutcome::Unauthenticated).destination,
            Destination::Login
        );
        assert_eq!(
            NavigationDecision::from_outcome(&AuthOutcome::Failed(AuthCheckFailed::Network(
                "offline".into()
            )))
            .destination,
            Destination::Login
        );
    }

    #[test]
    fn test_routes_from_config() {
        let config = SplashConfig {
            home_route: "dashboard".to_string(),
            ..SplashConfig::default()
        };
        let routes = Routes::from_config(&config);
        assert_eq!(routes.route_for(Destination::Home), "dashboard");
        assert_eq!(routes.route_for(Destination::Login), "login");
        assert_eq!(routes.splash, "splash");
    }

    #[test]
    fn test_recording_sink() {
        let sink = RecordingNavigationSink::new();
        sink.navigate(
            "home",
            &NavOptions {
                clear_entry: "splash".to_string(),
            },
        );
        assert_eq!(sink.calls().len(), 1);
        assert_eq!(sink.calls_to("home"), 1);
        assert_eq!(sink.calls_to("login"), 0);
    }
}
