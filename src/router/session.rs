use serde::{Deserialize, Serialize};

/// Mock session. There is no credential store behind it: `login` is
/// whatever the caller decided counts as a successful sign-in.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    is_authenticated: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn login(&mut self) {
        if !self.is_authenticated {
            tracing::info!("session authenticated");
        }
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        if self.is_authenticated {
            tracing::info!("session cleared");
        }
        self.is_authenticated = false;
    }
}
