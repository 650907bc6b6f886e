use dioxus::prelude::*;
use dioxus::router::Navigator;

use ui::{AuthProvider, RouteGuard, SignedOutOnly};
use views::{Dashboard, Login, Profile, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(SignedOut)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
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

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Layout for every route that needs a session.
#[component]
fn Protected() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        RouteGuard {
            path: route.to_string(),
            on_redirect: move |target: String| go(nav, &target),
            Outlet::<Route> {}
        }
    }
}

/// Layout for the sign-in pages, skipped by visitors that already have a
/// session.
#[component]
fn SignedOut() -> Element {
    let nav = use_navigator();

    rsx! {
        SignedOutOnly {
            on_redirect: move |target: String| go(nav, &target),
            Outlet::<Route> {}
        }
    }
}

/// Replace the current page with a configured route path.
fn go(nav: Navigator, target: &str) {
    match target.parse::<Route>() {
        Ok(route) => {
            nav.replace(route);
        }
        Err(e) => tracing::warn!("Unknown route {}: {}", target, e),
    }
}
