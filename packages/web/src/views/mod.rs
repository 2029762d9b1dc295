use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

mod local;
mod login;
mod logout;
mod profile;
mod signup;
mod users;

pub use local::LocalData;
pub use login::Login;
pub use logout::Logout;
pub use profile::Profile;
pub use signup::Signup;
pub use users::Users;

/// Renders the login view in place of `children` until a session exists.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_session();

    if !session.is_logged_in() {
        return rsx! { Login {} };
    }

    rsx! {
        {children}
    }
}

/// Shared page header with the signed-in identity and navigation links.
#[component]
pub fn PageHeader(
    eyebrow: String,
    title: String,
    subtitle: String,
    children: Element,
) -> Element {
    let session = use_session();
    let email = session.session().email;
    let who = if email.is_empty() { "User".to_string() } else { email };

    rsx! {
        header { class: "header",
            div {
                p { class: "eyebrow", "{eyebrow}" }
                h1 { "{title}" }
                p { class: "subtitle", "{subtitle}" }
            }
            div { class: "header__actions",
                div { class: "header__user",
                    span { "Signed in as" }
                    strong { "{who}" }
                }
                nav { class: "nav",
                    Link { class: "nav__link", to: Route::Profile {}, "Profile" }
                    Link { class: "nav__link", to: Route::Users {}, "Users" }
                    Link { class: "nav__link", to: Route::LocalData {}, "Local data" }
                    Link { class: "nav__link nav__link--danger", to: Route::Logout {}, "Logout" }
                }
                {children}
            }
        }
    }
}
