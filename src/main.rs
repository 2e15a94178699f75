#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod hooks;
mod routes;
mod utils;

use components::toast::ToastProvider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting DueD site v2.0");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Install global handlers once on mount
    use_effect(move || {
        utils::errors::install_rejection_hook();
        utils::accessibility::init_focus_tracking();
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        ToastProvider {
            Router::<routes::Route> {}
        }
    }
}
