//! Credentials store

use dioxus::prelude::*;
use std::fmt;

/// What the app may query with. Memory only; lost on reload.
#[derive(Clone, Default, PartialEq, Store)]
pub struct CredentialsState {
    /// Discogs personal access token as typed into the header
    pub token: String,
    /// Serve synthetic data instead of calling Discogs
    pub demo_mode: bool,
}

impl CredentialsState {
    /// Whether a search can be issued at all.
    pub fn is_active(&self) -> bool {
        self.demo_mode || !self.token.trim().is_empty()
    }
}

impl fmt::Debug for CredentialsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsState")
            .field("token", &"[REDACTED]")
            .field("demo_mode", &self.demo_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_with_token_or_demo() {
        assert!(!CredentialsState::default().is_active());
        assert!(!CredentialsState {
            token: "  ".to_string(),
            demo_mode: false
        }
        .is_active());
        assert!(CredentialsState {
            token: "abc".to_string(),
            demo_mode: false
        }
        .is_active());
        assert!(CredentialsState {
            token: String::new(),
            demo_mode: true
        }
        .is_active());
    }
}
