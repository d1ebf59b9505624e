use dioxus::prelude::*;
use ui::{LoginForm, Loops, Showcase};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Form & List Showcase" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Nav)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/loops")]
    People {},
}

#[component]
fn Nav() -> Element {
    rsx! {
        nav {
            class: "top-nav",
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Login {}, "Login form" }
            Link { to: Route::People {}, "People search" }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            Showcase {}
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginForm {}
    }
}

#[component]
fn People() -> Element {
    rsx! {
        Loops {}
    }
}
