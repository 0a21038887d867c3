use dioxus::prelude::*;

use crate::Route;

/// Fallback for every path the route table does not name, including the
/// destinations the chrome links to before they exist. Keeps the URL intact
/// rather than redirecting.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            h1 { class: "page-title", "Page not found" }
            p { class: "page-subtitle", "Nothing lives at {path} yet." }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to dashboard" }
        }
    }
}
