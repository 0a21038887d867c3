use dioxus::prelude::*;
use types::session::{Access, Gate, gate};

use crate::Route;
use crate::session::use_session;

impl Route {
    /// Access class fed to the guard predicate. The catch-all is public so
    /// referenced-but-unimplemented destinations render a not-found page
    /// instead of crashing.
    pub fn access(&self) -> Access {
        match self {
            Route::Login {} => Access::Anonymous,
            Route::Dashboard {} | Route::EmployeeList {} | Route::AddEmployee {} => {
                Access::Authenticated
            }
            Route::NotFound { .. } => Access::Public,
        }
    }
}

/// Renders its children when the session satisfies `access`, otherwise
/// replaces the current history entry with the redirect target.
///
/// The session read subscribes this component to the session signal, so a
/// login or logout while a guarded view is mounted re-evaluates the guard
/// rather than leaving a stale decision in place.
#[component]
pub fn Guarded(access: Access, children: Element) -> Element {
    let session = use_session();

    match gate(access, &session.session()) {
        Gate::Admit => rsx! { {children} },
        Gate::RedirectToLogin => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "loading", "Redirecting to sign in..." }
            }
        }
        Gate::RedirectToRoot => {
            navigator().replace(Route::Dashboard {});
            rsx! {
                div { class: "loading", "Redirecting..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use types::session::{Access, Gate, Session, gate};

    use crate::Route;

    fn signed_in() -> Session {
        let mut session = Session::new();
        session.log_in();
        session
    }

    #[test]
    fn protected_routes_send_anonymous_sessions_to_login() {
        let session = Session::new();
        for route in [
            Route::Dashboard {},
            Route::EmployeeList {},
            Route::AddEmployee {},
        ] {
            assert_eq!(
                gate(route.access(), &session),
                Gate::RedirectToLogin,
                "route {route:?}"
            );
        }
    }

    #[test]
    fn login_sends_authenticated_sessions_to_the_root() {
        assert_eq!(
            gate(Route::Login {}.access(), &signed_in()),
            Gate::RedirectToRoot
        );
    }

    #[test]
    fn authenticated_sessions_are_admitted_to_protected_routes() {
        assert_eq!(
            gate(Route::EmployeeList {}.access(), &signed_in()),
            Gate::Admit
        );
    }

    #[test]
    fn unknown_destinations_are_public() {
        let route = Route::unimplemented("forgot-password");
        assert_eq!(route.access(), Access::Public);
        assert_eq!(gate(route.access(), &Session::new()), Gate::Admit);
    }

    #[test]
    fn route_paths_match_the_table() {
        fn parse(path: &str) -> Route {
            match path.parse::<Route>() {
                Ok(route) => route,
                Err(_) => panic!("no route for {path}"),
            }
        }

        assert_eq!(parse("/login"), Route::Login {});
        assert_eq!(parse("/"), Route::Dashboard {});
        assert_eq!(parse("/employee"), Route::EmployeeList {});
        assert_eq!(parse("/employee/add-employee"), Route::AddEmployee {});
        assert_eq!(
            parse("/employees/edit/3"),
            Route::unimplemented("employees/edit/3")
        );
    }
}
