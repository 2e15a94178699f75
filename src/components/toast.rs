//! Transient, auto-dismissing notifications.
//!
//! `ToastProvider` is mounted once at the app root and owns the toast list
//! in a signal; handlers get a copyable [`Toasts`] handle through context
//! via [`use_toasts`]. Mounting the provider once is what guarantees a
//! single `#toast-container` per page.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::icons::{CheckCircleIcon, InfoIcon, XCircleIcon};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    /// Unrecognized kinds render as Info.
    pub fn from_str(s: &str) -> Self {
        match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    pub visible: bool,
}

/// Handle to the toast list, provided through context by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Show a toast for `duration_ms`, then let it transition out.
    /// Fire-and-forget: the entry is owned by the provider until its exit
    /// transition finishes.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        let mut entries = self.entries;
        entries.write().push(ToastEntry {
            id,
            message: message.into(),
            kind,
            duration_ms,
            visible: false,
        });

        spawn(async move {
            // The browser must commit the initial styles before the class
            // flips, or the entrance transition never runs.
            next_frame().await;
            set_visible(entries, id, true);

            TimeoutFuture::new(duration_ms).await;
            set_visible(entries, id, false);
            // DOM removal happens in ToastItem's ontransitionend.
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success, config::TOAST_DURATION_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error, config::TOAST_DURATION_MS);
    }

    #[allow(dead_code)]
    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info, config::TOAST_DURATION_MS);
    }
}

fn set_visible(mut entries: Signal<Vec<ToastEntry>>, id: u64, visible: bool) {
    if let Some(entry) = entries.write().iter_mut().find(|e| e.id == id) {
        entry.visible = visible;
    }
}

/// Grab the [`Toasts`] handle from context.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        entries: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    let mut entries = toasts.entries;
    let items = entries.read().clone();

    rsx! {
        {children}

        div {
            id: "toast-container",
            aria_live: "polite",
            aria_atomic: "true",
            for entry in items {
                ToastItem {
                    key: "{entry.id}",
                    entry,
                    on_gone: move |id: u64| entries.write().retain(|e| e.id != id),
                }
            }
        }
    }
}

#[component]
fn ToastItem(entry: ToastEntry, on_gone: EventHandler<u64>) -> Element {
    let id = entry.id;
    let visible = entry.visible;
    let show = if visible { "show" } else { "" };
    let kind = entry.kind.as_str();

    rsx! {
        div {
            class: "toast toast-{kind} {show}",
            role: "alert",
            // Fires after both the entrance and exit transitions; only the
            // exit one (visible already false) removes the entry.
            ontransitionend: move |_| {
                if !visible {
                    on_gone.call(id);
                }
            },
            span {
                class: "toast-icon",
                match entry.kind {
                    ToastKind::Success => rsx! { CheckCircleIcon { class: "w-5 h-5" } },
                    ToastKind::Error => rsx! { XCircleIcon { class: "w-5 h-5" } },
                    ToastKind::Info => rsx! { InfoIcon { class: "w-5 h-5" } },
                }
            }
            span { class: "toast-message", "{entry.message}" }
        }
    }
}

/// Resolve on the next animation frame. Falls through immediately when no
/// window is available (non-browser targets).
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|w| w.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            resolve.call0(&wasm_bindgen::JsValue::NULL).ok();
        }
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_kind_falls_back_to_info() {
        assert_eq!(ToastKind::from_str("warning"), ToastKind::Info);
        assert_eq!(ToastKind::from_str(""), ToastKind::Info);
    }

    #[test]
    fn known_kinds_round_trip() {
        for kind in [ToastKind::Success, ToastKind::Error, ToastKind::Info] {
            assert_eq!(ToastKind::from_str(kind.as_str()), kind);
        }
    }
}
