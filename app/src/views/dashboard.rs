use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "Welcome to Staffdeck - your employee administration interface." }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::employees(),
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Manage Employees" }
                    p { class: "dashboard-card-desc",
                        "Browse the roster, search and page through records, and toggle employee status."
                    }
                }
                Link {
                    to: Route::AddEmployee {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Add Employee" }
                    p { class: "dashboard-card-desc",
                        "Register a new employee with their contact, role, and joining details."
                    }
                }
            }
        }
    }
}
