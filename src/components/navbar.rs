//! Fixed top navigation with scroll-aware styling.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::utils::scroll;

#[component]
pub fn Navbar() -> Element {
    let scrolled = use_signal(|| false);

    use_effect(move || {
        #[cfg(target_family = "wasm")]
        {
            use std::cell::RefCell;
            use std::rc::Rc;
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            use crate::config;
            use crate::utils::rate_limit::Throttle;

            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };

            // Initial state before any scroll event arrives.
            refresh(&window, scrolled);

            let throttle = Rc::new(RefCell::new(Throttle::from_millis(
                config::SCROLL_THROTTLE_MS,
            )));
            let listener_window = window.clone();
            let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if throttle.borrow_mut().ready() {
                    refresh(&listener_window, scrolled);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                .ok();
            on_scroll.forget();
        }
    });

    let scrolled_class = if *scrolled.read() { "scrolled" } else { "" };

    rsx! {
        nav {
            class: "navbar {scrolled_class}",
            div {
                class: "navbar-inner max-w-6xl mx-auto px-6 flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "navbar-brand text-xl font-bold",
                    "DueD™"
                }
                div {
                    class: "navbar-links hidden md:flex items-center gap-6",
                    NavAnchor { target: "services", label: "Services" }
                    NavAnchor { target: "founders", label: "Founders" }
                    NavAnchor { target: "contact", label: "Contact" }
                }
            }
        }
    }
}

#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
fn refresh(window: &web_sys::Window, mut scrolled: Signal<bool>) {
    let over = window.scroll_y().unwrap_or(0.0) > crate::config::NAVBAR_SCROLL_THRESHOLD_PX;
    if *scrolled.peek() != over {
        scrolled.set(over);
    }
}

/// Same-page anchor that smooth-scrolls instead of jumping.
#[component]
fn NavAnchor(target: String, label: String) -> Element {
    let section = target.clone();

    rsx! {
        a {
            class: "navbar-link",
            href: "#{target}",
            onclick: move |e| {
                e.prevent_default();
                scroll::scroll_to_section(&section);
            },
            "{label}"
        }
    }
}
