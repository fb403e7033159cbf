use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{RegisterView, TrackerView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TrackerView)] Tracker {},
        #[route("/register", RegisterView)] Register {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-brand",
                span { class: "navbar-logo", "CT" }
                span { class: "navbar-title", "Coding Terminal" }
            }
            ul { class: "navbar-links",
                li { Link { to: Route::Tracker {}, "Problems" } }
                li { Link { to: Route::Register {}, "Register" } }
            }
            a {
                class: "navbar-subscribe",
                href: "https://youtube.com/@CodingTerminal",
                target: "_blank",
                "Subscribe"
            }
        }
    }
}
