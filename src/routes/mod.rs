use dioxus::prelude::*;

pub mod home;
pub mod profile;

mod not_found;

use home::Home;
use not_found::NotFound;
use profile::Profile;

use crate::components::{Navbar, PageLoader, SkipLink};

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/profile/:name")]
        Profile { name: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background",
            SkipLink {}
            PageLoader {}
            Navbar {}
            main {
                id: "main-content",
                class: "pt-20",
                Outlet::<Route> {}
            }
            footer {
                class: "border-t border-border mt-24 py-8 text-center text-sm text-muted-foreground",
                p { "© 2026 DueD™. All rights reserved." }
            }
        }
    }
}
