//! One-shot scroll-reveal hook.
//!
//! Returns a unique id to assign to the element that should animate in.
//! An IntersectionObserver adds `animate-in` the first time the element
//! enters the viewport and then stops observing it. The whole feature is
//! skipped when the user prefers reduced motion.

use dioxus::prelude::*;

pub fn use_scroll_reveal() -> String {
    let element_id = use_hook(|| format!("reveal-{}", uuid::Uuid::new_v4()));

    #[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
    let id_for_effect = element_id.clone();

    use_effect(move || {
        #[cfg(target_family = "wasm")]
        {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            if crate::utils::motion::prefers_reduced_motion() {
                return;
            }

            let id = id_for_effect.clone();
            spawn(async move {
                // Give the element a moment to land in the DOM.
                gloo_timers::future::TimeoutFuture::new(100).await;

                let document = match web_sys::window().and_then(|w| w.document()) {
                    Some(d) => d,
                    None => {
                        log::warn!("Failed to get document for IntersectionObserver");
                        return;
                    }
                };

                let element = match document.get_element_by_id(&id) {
                    Some(e) => e,
                    None => {
                        log::debug!("Reveal element {id} not in the DOM yet");
                        return;
                    }
                };

                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                        for i in 0..entries.length() {
                            if let Ok(entry) =
                                entries.get(i).dyn_into::<web_sys::IntersectionObserverEntry>()
                            {
                                if entry.is_intersecting() {
                                    let target = entry.target();
                                    target.class_list().add_1("animate-in").ok();
                                    // One-shot: this element never re-animates.
                                    observer.unobserve(&target);
                                }
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

                let options = web_sys::IntersectionObserverInit::new();
                options.set_root_margin("0px 0px -50px 0px");
                options.set_threshold(&JsValue::from_f64(0.1));

                let observer = match web_sys::IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(obs) => obs,
                    Err(e) => {
                        log::error!("Failed to create IntersectionObserver: {:?}", e);
                        return;
                    }
                };

                observer.observe(&element);

                // Keep callback alive for the page lifetime.
                callback.forget();
            });
        }
    });

    element_id
}
