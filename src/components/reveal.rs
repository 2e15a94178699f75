//! Scroll-triggered reveal wrapper.

use dioxus::prelude::*;

use crate::hooks::use_scroll_reveal;

/// Wraps its children in an element that animates in the first time it
/// scrolls into view. With reduced motion preferred the observer is never
/// installed and the CSS keeps the content fully visible.
#[component]
pub fn Reveal(children: Element, #[props(default = String::new())] class: String) -> Element {
    let reveal_id = use_scroll_reveal();

    rsx! {
        div {
            id: "{reveal_id}",
            class: "animate-on-scroll {class}",
            {children}
        }
    }
}
