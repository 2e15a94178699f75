//! Keyboard/mouse modality tracking and skip-link focus.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Track pointer modality on `<body>` so focus rings only show for
/// keyboard users: mousedown adds `using-mouse`, Tab removes it.
pub fn init_focus_tracking() {
    let body = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        Some(b) => b,
        None => return,
    };

    let mouse_body = body.clone();
    let on_mousedown = Closure::wrap(Box::new(move |_: web_sys::Event| {
        mouse_body.class_list().add_1("using-mouse").ok();
    }) as Box<dyn FnMut(web_sys::Event)>);
    body.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())
        .ok();
    on_mousedown.forget();

    let key_body = body.clone();
    let on_keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
        if e.key() == "Tab" {
            key_body.class_list().remove_1("using-mouse").ok();
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
    body.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .ok();
    on_keydown.forget();
}

/// Force programmatic focus onto a content region the skip link points at.
/// The region gets `tabindex="-1"` so it can receive focus at all.
pub fn focus_region(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(element) = element {
        if let Ok(html) = element.dyn_into::<web_sys::HtmlElement>() {
            html.set_tab_index(-1);
            html.focus().ok();
        }
    }
}
