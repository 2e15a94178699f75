//! Startup overlay.
//!
//! Hidden by whichever fires first of a short post-mount delay or the hard
//! fallback timeout. Neither timer cancels the other; `hide` is idempotent
//! so the loser is a no-op. The node leaves the DOM 500ms after the fade
//! starts, matching the transition in main.css.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::config;

#[component]
pub fn PageLoader() -> Element {
    let hidden = use_signal(|| false);
    let gone = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(config::LOADER_HIDE_DELAY_MS).await;
            hide(hidden, gone);
        });
        // Fallback in case the first timer is starved by startup work.
        spawn(async move {
            TimeoutFuture::new(config::LOADER_TIMEOUT_MS).await;
            hide(hidden, gone);
        });
    });

    if *gone.read() {
        return rsx! {};
    }

    let hidden_class = if *hidden.read() { "hidden" } else { "" };

    rsx! {
        div {
            id: "page-loader",
            class: "page-loader {hidden_class}",
            aria_hidden: "true",
            div { class: "spinner" }
        }
    }
}

fn hide(mut hidden: Signal<bool>, mut gone: Signal<bool>) {
    if *hidden.peek() {
        return;
    }
    hidden.set(true);

    spawn(async move {
        TimeoutFuture::new(500).await;
        gone.set(true);
    });
}
