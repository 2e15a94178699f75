//! Skip-to-content link for keyboard users.

use dioxus::prelude::*;

use crate::utils::accessibility;

#[component]
pub fn SkipLink() -> Element {
    rsx! {
        a {
            class: "skip-link",
            href: "#main-content",
            onclick: move |e| {
                e.prevent_default();
                accessibility::focus_region("main-content");
            },
            "Skip to main content"
        }
    }
}
