//! Global capture of unhandled async failures.
//!
//! Panics already reach the console through `console_error_panic_hook`;
//! this covers promise rejections that escape every handler. They are
//! logged and swallowed so the page never crashes.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn install_rejection_hook() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let hook = Closure::wrap(Box::new(move |event: web_sys::PromiseRejectionEvent| {
        log::error!("Unhandled rejection: {:?}", event.reason());
    }) as Box<dyn FnMut(web_sys::PromiseRejectionEvent)>);

    window
        .add_event_listener_with_callback("unhandledrejection", hook.as_ref().unchecked_ref())
        .ok();
    hook.forget();
}
