//! Authentication gate.

use std::sync::Arc;

use async_trait::async_trait;

use super::NavigationGuard;
use crate::normalize::normalize_path;
use crate::session::{is_authenticated, SessionStore};
use crate::types::{GuardDecision, Location};

/// Query parameter carrying the originally requested full path through the
/// login flow, so it can return the user there after authentication.
pub const REDIRECT_PARAM: &str = "redirect";

/// Gates navigations to routes with `requires_auth` set.
///
/// The token is re-read from the store on every protected navigation, so a
/// login or logout takes effect on the very next attempt with no cache to
/// invalidate. Public routes pass unconditionally.
pub struct AuthGate {
    store: Arc<dyn SessionStore>,
    login_path: String,
}

impl AuthGate {
    /// Create a gate reading tokens from `store`, redirecting to `/login`.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            login_path: "/login".to_string(),
        }
    }

    /// Override the login path unauthenticated navigations redirect to.
    pub fn with_login_path(mut self, path: &str) -> Self {
        self.login_path = normalize_path(path);
        self
    }
}

#[async_trait]
impl NavigationGuard for AuthGate {
    fn name(&self) -> &'static str {
        "auth"
    }

    async fn check(&self, to: &Location, _from: &Location) -> GuardDecision {
        let protected = to
            .matched
            .as_ref()
            .is_some_and(|route| route.meta.requires_auth);
        if !protected || is_authenticated(self.store.as_ref()) {
            return GuardDecision::Allow;
        }
        let target = Location::parse(&self.login_path).with_param(REDIRECT_PARAM, &to.full_path());
        GuardDecision::Redirect(target)
    }
}
