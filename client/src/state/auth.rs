//! Anonymous identity state.
//!
//! The app signs in anonymously at startup so remote saves can be attributed
//! to a session. When sign-in fails the app degrades to local-only mode with
//! a generated id; sharing then skips the remote store entirely.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[derive(Debug, Clone)]
pub struct AuthState {
    /// Session identifier, remote-issued or locally generated.
    pub user_id: Option<String>,
    /// True when sign-in failed and remote persistence must be skipped.
    pub local_only: bool,
    /// True until the startup sign-in attempt resolves.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user_id: None,
            local_only: false,
            loading: true,
        }
    }
}

impl AuthState {
    /// Record a remote-issued identity.
    pub fn signed_in(&mut self, user_id: String) {
        self.user_id = Some(user_id);
        self.local_only = false;
        self.loading = false;
    }

    /// Degrade to local-only mode with a generated identity.
    pub fn local_fallback(&mut self, user_id: String) {
        self.user_id = Some(user_id);
        self.local_only = true;
        self.loading = false;
    }
}
