use dioxus::prelude::*;

use ui::SessionProvider;
use views::{LocalData, Login, Logout, Profile, Signup, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/profile")]
    Profile {},
    #[route("/users")]
    Users {},
    #[route("/local")]
    LocalData {},
    #[route("/logout")]
    Logout {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/profile`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}
