//! Logout view. Ends the session server-side, then returns to the login page.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Logout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut done = use_signal(|| false);

    use_future(move || async move {
        session.logout().await;
        done.set(true);
    });

    if done() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div { class: "auth-shell",
            h3 { "Logging out..." }
        }
    }
}
