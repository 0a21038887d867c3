use dioxus::prelude::*;

mod guard;
mod session;
mod views;

use guard::Guarded;
use session::SessionState;
use types::employee::EmployeeDraft;
use types::session::Access;
use views::{AddEmployee, Dashboard, Employees, Login, Navbar, NotFound, Sidebar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/employee")]
        EmployeeList {},
        #[route("/employee/add-employee")]
        AddEmployee {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn employees() -> Self {
        Route::EmployeeList {}
    }

    /// Route to a destination the navigation chrome references but the app
    /// does not implement yet. Lands on the not-found view.
    pub fn unimplemented(path: &str) -> Self {
        Route::NotFound {
            segments: path.split('/').map(String::from).collect(),
        }
    }
}

#[component]
fn EmployeeList() -> Element {
    rsx! { Employees {} }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);
    use_context_provider(CreateEmployee::default);

    rsx! {
        document::Title { "Staffdeck" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Injectable create-employee collaborator. The add-employee view hands a
/// validated draft to whatever sink is provided at the app root.
#[derive(Clone, Copy)]
pub struct CreateEmployee(Callback<EmployeeDraft>);

impl CreateEmployee {
    pub fn new(sink: impl FnMut(EmployeeDraft) + 'static) -> Self {
        Self(Callback::new(sink))
    }

    pub fn create(&self, draft: EmployeeDraft) {
        self.0.call(draft);
    }
}

impl Default for CreateEmployee {
    /// The default sink only logs the draft; the roster view seeds its own
    /// data and is never written to. A real backing store plugs in here.
    fn default() -> Self {
        Self::new(|draft: EmployeeDraft| {
            tracing::info!(?draft, "employee submitted");
        })
    }
}

pub fn use_create_employee() -> CreateEmployee {
    use_context::<CreateEmployee>()
}

/// Persistent navigation shell for the authenticated subtree: sidebar,
/// navbar, and an outlet for the matched child. The outlet is guarded, so a
/// signed-out session is bounced to the login screen no matter which child
/// matched.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-layout",
            Sidebar {}
            div { class: "main-column",
                Navbar {}
                main { class: "main-content",
                    Guarded { access: Access::Authenticated, Outlet::<Route> {} }
                }
            }
        }
    }
}
