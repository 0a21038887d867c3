use secrecy::SecretString;

use crate::ValidationError;

/// Process-lifetime authentication flag.
///
/// Exactly one instance exists for a running application, created
/// unauthenticated at startup. Nothing is persisted: a restart starts over
/// signed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn log_in(&mut self) {
        self.authenticated = true;
    }

    pub fn log_out(&mut self) {
        self.authenticated = false;
    }
}

/// Login form payload. The password is wrapped so it never shows up in
/// debug output.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into().into(),
        }
    }

    /// Both fields are required; the mock backend checks nothing else.
    pub fn validate(&self) -> Result<(), ValidationError> {
        use secrecy::ExposeSecret;

        let mut missing = Vec::new();
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.password.expose_secret().is_empty() {
            missing.push("password");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(missing))
        }
    }
}

/// Who a route admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Signed-in sessions only.
    Authenticated,
    /// Signed-out sessions only (the login screen).
    Anonymous,
}

/// Outcome of evaluating a route's access class against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Admit,
    RedirectToLogin,
    RedirectToRoot,
}

/// The route-guard predicate. Pure, so it can be tested without a router
/// or a rendering environment; the caller turns a redirect decision into a
/// history-replacing navigation.
pub fn gate(access: Access, session: &Session) -> Gate {
    match access {
        Access::Public => Gate::Admit,
        Access::Authenticated => {
            if session.is_authenticated() {
                Gate::Admit
            } else {
                Gate::RedirectToLogin
            }
        }
        Access::Anonymous => {
            if session.is_authenticated() {
                Gate::RedirectToRoot
            } else {
                Gate::Admit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Session {
        let mut session = Session::new();
        session.log_in();
        session
    }

    #[test]
    fn new_session_is_unauthenticated() {
        assert!(!Session::new().is_authenticated());
    }

    #[test]
    fn login_and_logout_flip_the_flag() {
        let mut session = Session::new();
        session.log_in();
        assert!(session.is_authenticated());
        session.log_out();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn guarded_routes_redirect_anonymous_sessions_to_login() {
        let session = Session::new();
        assert_eq!(
            gate(Access::Authenticated, &session),
            Gate::RedirectToLogin
        );
    }

    #[test]
    fn login_route_redirects_authenticated_sessions_to_root() {
        assert_eq!(gate(Access::Anonymous, &signed_in()), Gate::RedirectToRoot);
    }

    #[test]
    fn matching_sessions_are_admitted() {
        assert_eq!(gate(Access::Authenticated, &signed_in()), Gate::Admit);
        assert_eq!(gate(Access::Anonymous, &Session::new()), Gate::Admit);
    }

    #[test]
    fn public_routes_admit_everyone() {
        assert_eq!(gate(Access::Public, &Session::new()), Gate::Admit);
        assert_eq!(gate(Access::Public, &signed_in()), Gate::Admit);
    }

    #[test]
    fn credentials_require_both_fields() {
        let creds = Credentials::new("admin@example.com", "hunter2");
        assert!(creds.validate().is_ok());

        let missing = Credentials::new("", "").validate().unwrap_err();
        assert_eq!(missing.fields, vec!["email", "password"]);

        let missing = Credentials::new("admin@example.com", "")
            .validate()
            .unwrap_err();
        assert_eq!(missing.fields, vec!["password"]);
    }

    #[test]
    fn credentials_debug_does_not_leak_the_password() {
        let creds = Credentials::new("admin@example.com", "hunter2");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
