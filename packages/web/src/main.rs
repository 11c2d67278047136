use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider};
use views::{Admin, Files, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/files")]
    Files {},
    #[route("/admin")]
    Admin {},
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
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/files`; its gate bounces anonymous visitors on to login.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Files {});
    rsx! {}
}
