//! Registration view.

use api::SignupForm;
use dioxus::prelude::*;
use ui::{use_session, Alert, Field};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut firstname = use_signal(String::new);
    let mut lastname = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut submitting = use_signal(|| false);
    let mut success = use_signal(|| false);
    let mut error_message = use_signal(String::new);

    if session.is_logged_in() {
        nav.replace(Route::Profile {});
        return rsx! {};
    }

    let onsignup = move |_| async move {
        let form = SignupForm {
            firstname: firstname.peek().trim().to_string(),
            lastname: lastname.peek().trim().to_string(),
            username: username.peek().trim().to_string(),
            email: email.peek().trim().to_string(),
            password: password.peek().clone(),
        };

        if form.username.is_empty() || form.email.is_empty() || form.password.is_empty() {
            success.set(false);
            error_message.set("Username, email, and password are required.".to_string());
            return;
        }
        if *password.peek() != *confirm_password.peek() {
            success.set(false);
            error_message.set("Passwords do not match.".to_string());
            return;
        }

        submitting.set(true);
        success.set(false);
        error_message.set(String::new());

        let outcome = session.signup(form).await;

        submitting.set(false);
        success.set(outcome.ok);
        error_message.set(if outcome.ok { String::new() } else { outcome.message });
    };

    rsx! {
        div { class: "auth-shell",
            div { class: "auth-card",
                p { class: "eyebrow", "Create Account" }
                h2 { "Sign up" }
                p { class: "subtitle", "Create an account to access the dashboard." }

                Field {
                    label: "First name",
                    value: firstname(),
                    oninput: move |evt: FormEvent| firstname.set(evt.value()),
                }
                Field {
                    label: "Last name",
                    value: lastname(),
                    oninput: move |evt: FormEvent| lastname.set(evt.value()),
                }
                Field {
                    label: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
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
                Field {
                    label: "Confirm password",
                    input_type: "password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: onsignup,
                    if submitting() { "Creating account…" } else { "Sign up" }
                }

                if !error_message().is_empty() {
                    Alert { "{error_message}" }
                }
                if success() {
                    Alert { success: true,
                        "Account created. "
                        Link { to: Route::Login {}, "Go to Login" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
