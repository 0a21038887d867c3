use dioxus::prelude::*;
use types::session::{Access, Credentials};

use crate::Route;
use crate::guard::Guarded;
use crate::session::use_session;

/// Sign-in screen. Anonymous-only: an already-authenticated session is
/// bounced back to the dashboard.
#[component]
pub fn Login() -> Element {
    rsx! {
        Guarded { access: Access::Anonymous, LoginCard {} }
    }
}

#[component]
fn LoginCard() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let credentials = Credentials::new(email(), password());
        if let Err(invalid) = credentials.validate() {
            error.set(Some(invalid.to_string()));
            return;
        }

        error.set(None);
        loading.set(true);
        spawn(async move {
            // The mock login cannot fail; the error arm is here so a real
            // backend can surface AuthError inline and re-enable the button.
            if let Err(failed) = session.login(credentials).await {
                error.set(Some(failed.to_string()));
                loading.set(false);
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Sign In" }
                    p { class: "login-subtitle", "Staffdeck Administration" }
                }
                form { class: "login-form", onsubmit: submit,
                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
                    }
                    div { class: "form-group",
                        input {
                            class: "form-input",
                            r#type: "email",
                            name: "email",
                            placeholder: "Email Address",
                            required: true,
                            value: "{email}",
                            oninput: move |e| {
                                email.set(e.value());
                                error.set(None);
                            },
                        }
                    }
                    div { class: "form-group",
                        input {
                            class: "form-input",
                            r#type: "password",
                            name: "password",
                            placeholder: "Password",
                            required: true,
                            minlength: "6",
                            value: "{password}",
                            oninput: move |e| {
                                password.set(e.value());
                                error.set(None);
                            },
                        }
                    }
                    div { class: "login-links",
                        Link {
                            to: Route::unimplemented("forgot-password"),
                            class: "text-muted",
                            "Forgot password?"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: loading(),
                        if loading() {
                            "Signing in..."
                        } else {
                            "Continue"
                        }
                    }
                }
                p { class: "login-footer",
                    "Don't have an account? "
                    Link { to: Route::unimplemented("register"), "Get started" }
                }
            }
        }
    }
}
