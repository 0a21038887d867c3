use std::time::Duration;

use dioxus::prelude::*;
use types::AuthError;
use types::session::{Credentials, Session};

use crate::Route;

/// How long the mock login pretends to talk to a backend.
const LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// The one session store for the running application, provided as a context
/// at the app root - use `use_session()` to access.
#[derive(Clone, Copy)]
pub struct SessionState(Signal<Session>);

impl SessionState {
    pub fn new() -> Self {
        Self(Signal::new(Session::new()))
    }

    /// Snapshot of the session. Reading it inside a component subscribes the
    /// component to later login/logout transitions.
    pub fn session(&self) -> Session {
        *self.0.read()
    }

    /// Mock login: accepts any credentials after a fixed delay, flips the
    /// flag, and replaces the current route with the dashboard.
    ///
    /// Never returns `Err` as written, but callers must handle the error arm
    /// so a real credential check can replace the sleep without touching the
    /// call sites.
    pub async fn login(&mut self, credentials: Credentials) -> Result<(), AuthError> {
        tokio::time::sleep(LOGIN_DELAY).await;
        self.0.write().log_in();
        tracing::info!(email = %credentials.email, "signed in");
        navigator().replace(Route::Dashboard {});
        Ok(())
    }

    /// Synchronous: flips the flag and replaces the route with the login
    /// screen.
    pub fn logout(&mut self) {
        self.0.write().log_out();
        tracing::info!("signed out");
        navigator().replace(Route::Login {});
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
