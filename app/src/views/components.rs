use dioxus::prelude::*;
use jiff::Timestamp;
use types::notification::{sample_feed, time_ago};

use crate::Route;
use crate::session::use_session;

/// Top navigation bar: search box, dark-mode toggle, and the notification
/// and profile dropdowns. Opening one dropdown closes the other, and a
/// full-screen overlay closes whichever is open.
#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let mut profile_open = use_signal(|| false);
    let mut notifications_open = use_signal(|| false);
    let mut dark_mode = use_signal(|| false);
    let feed = use_signal(|| sample_feed(Timestamp::now()));

    let any_open = profile_open() || notifications_open();
    let has_unread = feed.read().iter().any(|n| !n.read);
    let now = Timestamp::now();

    let mut close_all = move || {
        profile_open.set(false);
        notifications_open.set(false);
    };

    rsx! {
        nav { class: if dark_mode() { "navbar navbar-dark" } else { "navbar" },
            div { class: "navbar-search",
                input {
                    class: "form-input",
                    r#type: "search",
                    placeholder: "Search...",
                }
            }
            div { class: "navbar-actions",
                button {
                    class: "navbar-icon-btn",
                    onclick: move |_| dark_mode.set(!dark_mode()),
                    if dark_mode() { "Light" } else { "Dark" }
                }

                div { class: "navbar-dropdown-anchor",
                    button {
                        class: "navbar-icon-btn",
                        onclick: move |_| {
                            let open = notifications_open();
                            notifications_open.set(!open);
                            profile_open.set(false);
                        },
                        "Alerts"
                        if has_unread {
                            span { class: "unread-dot" }
                        }
                    }
                    if notifications_open() {
                        div { class: "dropdown-menu dropdown-wide",
                            div { class: "dropdown-header", "Notifications" }
                            for notification in feed.read().iter() {
                                {
                                    let ago = time_ago(notification.at, now);
                                    rsx! {
                                        div {
                                            key: "{notification.id}",
                                            class: if notification.read { "dropdown-item" } else { "dropdown-item unread" },
                                            p { class: "dropdown-item-text", "{notification.text}" }
                                            p { class: "dropdown-item-time", "{ago}" }
                                        }
                                    }
                                }
                            }
                            div { class: "dropdown-footer",
                                Link {
                                    to: Route::unimplemented("notifications"),
                                    onclick: move |_| close_all(),
                                    "View all notifications"
                                }
                            }
                        }
                    }
                }

                div { class: "navbar-dropdown-anchor",
                    button {
                        class: "navbar-icon-btn",
                        onclick: move |_| {
                            let open = profile_open();
                            profile_open.set(!open);
                            notifications_open.set(false);
                        },
                        "Admin User"
                    }
                    if profile_open() {
                        div { class: "dropdown-menu",
                            Link {
                                to: Route::unimplemented("profile"),
                                class: "dropdown-item",
                                onclick: move |_| close_all(),
                                "Your Profile"
                            }
                            Link {
                                to: Route::unimplemented("settings"),
                                class: "dropdown-item",
                                onclick: move |_| close_all(),
                                "Settings"
                            }
                            button {
                                class: "dropdown-item dropdown-danger",
                                onclick: move |_| {
                                    close_all();
                                    session.logout();
                                },
                                "Sign out"
                            }
                        }
                    }
                }
            }

            if any_open {
                div { class: "dropdown-overlay", onclick: move |_| close_all() }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = matches!(
        (&current_route, &to),
        (Route::Dashboard {}, Route::Dashboard {})
            | (Route::EmployeeList {}, Route::EmployeeList {})
            | (Route::AddEmployee {}, Route::AddEmployee {})
    );

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Navigation rail for the authenticated shell.
#[component]
pub fn Sidebar() -> Element {
    let mut collapsed = use_signal(|| false);

    rsx! {
        aside { class: if collapsed() { "sidebar collapsed" } else { "sidebar" },
            div { class: "sidebar-header",
                span { class: "sidebar-logo", "Staffdeck" }
                button {
                    class: "sidebar-toggle",
                    onclick: move |_| collapsed.set(!collapsed()),
                    if collapsed() { ">" } else { "<" }
                }
            }
            nav { class: "sidebar-nav",
                NavLink { to: Route::Dashboard {}, "Dashboard" }
                NavLink { to: Route::employees(), "Employees" }
                NavLink { to: Route::AddEmployee {}, "Add Employee" }
            }
            div { class: "sidebar-footer",
                Link { to: Route::unimplemented("profile"), "Profile" }
                Link { to: Route::unimplemented("settings"), "Settings" }
            }
        }
    }
}
