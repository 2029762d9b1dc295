//! Login view with email/password form.

use dioxus::prelude::*;
use ui::{use_session, Alert, Field};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut logging_in = use_signal(|| false);
    let mut login_error = use_signal(|| false);

    // Already authenticated: straight to the dashboard
    if session.is_logged_in() {
        nav.replace(Route::Profile {});
        return rsx! {};
    }

    let onlogin = move |_| async move {
        logging_in.set(true);
        login_error.set(false);
        let ok = session
            .login(email.peek().clone(), password.peek().clone())
            .await;
        logging_in.set(false);
        login_error.set(!ok);
    };

    rsx! {
        div { class: "auth-shell",
            div { class: "auth-card",
                p { class: "eyebrow", "Welcome Back" }
                h2 { "Sign in to continue" }
                p { class: "subtitle", "Use your account to access the dashboard." }

                Field {
                    label: "Email",
                    input_type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Field {
                    label: "Password",
                    input_type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    disabled: logging_in(),
                    onclick: onlogin,
                    if logging_in() { "Signing in…" } else { "Login" }
                }

                if login_error() {
                    Alert { "Login incorrect" }
                }

                p { class: "auth-switch",
                    "Need an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
